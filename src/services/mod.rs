pub mod encyclopedia;
