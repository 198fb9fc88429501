#![forbid(unsafe_code)]

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod utils;

mod default_environment;
pub use default_environment::default_env;

#[macro_use]
mod macros;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "i32")] { pub type IntType = i32; }
    else                       {
        /// The underlying type to use for storing lisp integers. Controlled via feature-flags.
        pub type IntType = i64;
    }
}

cfg_if! {
    if #[cfg(feature = "f32")] { pub type FloatType = f32; }
    else                       {
        /// The underlying type to use for storing lisp floats. Controlled via feature-flags.
        pub type FloatType = f64;
    }
}

mod env;
mod errors;
mod lambda;
mod list;
mod symbol;
mod value;

pub use env::Env;
pub use errors::{ParseError, RuntimeError};
pub use lambda::Lambda;
pub use list::ConsIterator;
pub use list::List;
pub use symbol::Symbol;
pub use value::{NativeFunc, Value};
