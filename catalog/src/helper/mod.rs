//! Greeting helper

/// Prefix placed in front of every greeted name
pub const GREETING_PREFIX: &str = "Hello ";

/// Greet `name`.
///
/// The name is appended unchanged, so an empty name yields `"Hello "`.
///
/// ```
/// use catalog::helper::hello_world;
/// assert_eq!(hello_world("Izzan"), "Hello Izzan");
/// ```
pub fn hello_world(name: &str) -> String {
    format!("{}{}", GREETING_PREFIX, name)
}
