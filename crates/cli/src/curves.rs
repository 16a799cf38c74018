//! Curve file loading: whitespace-separated `x y` per line.

use std::path::Path;

use anyhow::{Context, Result};
use frechet_cert::api::{Curve, Point};

pub fn read_curve(path: &Path) -> Result<Curve> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading curve file {}", path.display()))?;
    parse_curve(&text).with_context(|| format!("parsing curve file {}", path.display()))
}

pub fn parse_curve(text: &str) -> Result<Curve> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut it = line.split_whitespace();
        let (Some(xs), Some(ys)) = (it.next(), it.next()) else {
            anyhow::bail!("line {}: expected `x y`", lineno + 1);
        };
        let x: f64 = xs
            .parse()
            .with_context(|| format!("line {}: bad x coordinate", lineno + 1))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("line {}: bad y coordinate", lineno + 1))?;
        points.push(Point::new(x, y));
    }
    Ok(Curve::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_points_and_skips_blanks() {
        let c = parse_curve("0 0\n\n1.5 2\n3 4\n").unwrap();
        assert_eq!(c.size(), 3);
        assert_eq!(c[1], Point::new(1.5, 2.0));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_curve("0\n").is_err());
        assert!(parse_curve("a b\n").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "0 0").unwrap();
        writeln!(f, "2 1").unwrap();
        let c = read_curve(f.path()).unwrap();
        assert_eq!(c.size(), 2);
    }
}
