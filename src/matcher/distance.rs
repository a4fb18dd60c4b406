use crate::color::Rgb;

/// Sum of squared channel differences, computed in floating point so that
/// out-of-range channels cannot overflow.
pub fn squared_distance(a: &Rgb, b: &Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    dr * dr + dg * dg + db * db
}

/// Unweighted Euclidean distance between two triples.
pub fn euclidean_distance(a: &Rgb, b: &Rgb) -> f64 {
    squared_distance(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_channel_difference() {
        let a = Rgb::new(255, 255, 0);
        let b = Rgb::new(255, 255, 17);
        assert_eq!(squared_distance(&a, &b), 289.0);
        assert_eq!(euclidean_distance(&a, &b), 17.0);
    }

    #[test]
    fn extreme_channels_do_not_overflow() {
        let a = Rgb::new(i32::MIN, i32::MIN, i32::MIN);
        let b = Rgb::new(i32::MAX, i32::MAX, i32::MAX);
        assert!(euclidean_distance(&a, &b).is_finite());
    }
}
