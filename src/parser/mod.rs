// Parser module for extracting docstrings from source files

mod docstring;
mod python;

pub use docstring::clean_docstring;
pub use python::DocParser;
