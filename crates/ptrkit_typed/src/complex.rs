use num_complex::{Complex32, Complex64};

impl_typed!(Complex32 => complex32, to_complex32, must_complex32, complex32_vec, to_complex32_vec, complex32_map, to_complex32_map);
impl_typed!(Complex64 => complex64, to_complex64, must_complex64, complex64_vec, to_complex64_vec, complex64_map, to_complex64_map);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn complex_helpers() {
        let z = Complex64::new(1.0, -2.0);
        assert_eq!(to_complex64(complex64(z)), z);
        assert_eq!(to_complex64(None), Complex64::new(0.0, 0.0));
        assert_eq!(to_complex32(None), Complex32::new(0.0, 0.0));
        assert_eq!(must_complex32(complex32(Complex32::new(0.5, 0.5))).im, 0.5);
    }

    #[test]
    fn complex_sequences() {
        let one = Complex32::new(1.0, 0.0);
        assert_eq!(
            to_complex32_vec(Some(vec![Some(one), None])),
            Some(vec![one, Complex32::new(0.0, 0.0)])
        );
    }
}
