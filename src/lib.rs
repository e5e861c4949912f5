pub mod error;

pub mod matrix {
    pub mod square;
}
