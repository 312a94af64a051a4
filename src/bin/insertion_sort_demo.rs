use std::io::{self, Write};

fn main() -> io::Result<()> {
    let mut out = io::stdout().lock();
    insertion_sort_rs::demo::run(&mut out)?;
    out.flush()
}
