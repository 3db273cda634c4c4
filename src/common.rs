pub use vec1::vec1;

pub type Float = f64;

/// The value carried by a constant token.
pub type Digit = u8;

pub type NonEmpty<T> = vec1::Vec1<T>;
