//! Extension Traits: fizzling strings
//!
//! An extension trait attaches a method to a type we don't own. Here every
//! string-like type gets `.fizzle()`, which is nothing more than sugar for the
//! free function [`fizzle`]: both spellings produce the same result.
//!
//! ```
//! use sugar::embellish::{fizzle, Fizzle};
//!
//! assert_eq!("Hello".fizzle(), "HelloFizz");
//! assert_eq!(fizzle("Hello"), "HelloFizz");
//! assert_eq!(Fizzle::fizzle("Hello"), "HelloFizz");
//! ```

/// Appended by every call to [`fizzle`].
pub const SUFFIX: &str = "Fizz";

/// Returns `input` followed by [`SUFFIX`]. Total over all strings.
pub fn fizzle(input: &str) -> String {
    let mut fizzed = String::with_capacity(input.len() + SUFFIX.len());
    fizzed.push_str(input);
    fizzed.push_str(SUFFIX);
    fizzed
}

pub trait Fizzle {
    fn fizzle(&self) -> String;
}

// Blanket impl: str, String, Cow<str>, Box<str>... all get fizzle().
impl<T: AsRef<str> + ?Sized> Fizzle for T {
    fn fizzle(&self) -> String {
        fizzle(self.as_ref())
    }
}
