// File: crates/tschart-core/src/line.rs
// Summary: Straight-segment line generator producing SVG path data from projected points.

use crate::ticks::format_coord;

/// `M x0,y0 L x1,y1 ...` over `points` in the order given. `None` for no points.
pub fn line_path(points: &[(f64, f64)]) -> Option<String> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut d = format!("M{},{}", format_coord(x0), format_coord(y0));
    for &(x, y) in rest {
        d.push('L');
        d.push_str(&format_coord(x));
        d.push(',');
        d.push_str(&format_coord(y));
    }
    Some(d)
}

/// Parse path data written by `line_path` back into points.
pub fn parse_line_path(d: &str) -> Option<Vec<(f64, f64)>> {
    let body = d.strip_prefix('M')?;
    body.split('L')
        .map(|seg| {
            let (x, y) = seg.split_once(',')?;
            Some((x.parse().ok()?, y.parse().ok()?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_keeps_input_order() {
        let d = line_path(&[(40.0, 370.0), (100.5, 12.25), (620.0, 20.0)]).unwrap();
        assert_eq!(d, "M40,370L100.5,12.25L620,20");
        assert_eq!(parse_line_path(&d).unwrap(), vec![(40.0, 370.0), (100.5, 12.25), (620.0, 20.0)]);
    }

    #[test]
    fn single_point_is_a_bare_move() {
        assert_eq!(line_path(&[(1.0, 2.0)]).as_deref(), Some("M1,2"));
    }

    #[test]
    fn no_points_no_path() {
        assert!(line_path(&[]).is_none());
        assert!(parse_line_path("garbage").is_none());
    }
}
