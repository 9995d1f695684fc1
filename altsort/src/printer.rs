//! Text dump of array collections.

use std::io::Write;

/// Writes `arrays` to `wtr`, one array per line.
///
/// Each element is followed by a space and each line ends with `|`. A blank line closes the
/// collection, so an empty collection is written as a single newline.
///
/// # Errors
///
/// [`std::io::Error`] is returned when writing fails.
pub fn write_arrays<W, A>(mut wtr: W, arrays: &[A]) -> std::io::Result<()>
where
    W: Write,
    A: AsRef<[i32]>,
{
    for values in arrays {
        for n in values.as_ref() {
            write!(wtr, "{n} ")?;
        }
        writeln!(wtr, "|")?;
    }
    writeln!(wtr)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_arrays() {
        let mut out = vec![];
        write_arrays(&mut out, &[vec![5, -2, 0], vec![42]]).unwrap();
        assert_eq!("5 -2 0 |\n42 |\n\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn test_write_empty() {
        let mut out = vec![];
        write_arrays::<_, Vec<i32>>(&mut out, &[]).unwrap();
        assert_eq!("\n", String::from_utf8(out).unwrap());
    }
}
