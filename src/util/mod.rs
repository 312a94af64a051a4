#[cfg(test)]
pub(crate) mod debug_assertions;

/// Prints the `{:?}` rendering of its argument in debug builds only.
#[cfg(test)]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}
