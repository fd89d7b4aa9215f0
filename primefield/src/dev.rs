//! Development-related functionality.

/// Write a series of `criterion`-based benchmarks for a field implementation.
///
/// `$params` is an expression evaluating to the [`FieldParams`](crate::FieldParams) of the
/// field; `$fe_a` and `$fe_b` are `u64` seeds for the operands.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $params:expr, $fe_a:expr, $fe_b:expr } => {
        fn $name(c: &mut ::criterion::Criterion) {
            let params = $params;
            let x = core::hint::black_box($crate::FieldElement::from_u64(&params, $fe_a));
            let y = core::hint::black_box($crate::FieldElement::from_u64(&params, $fe_b));

            let mut group = c.benchmark_group($desc);
            group.bench_function("add", |b| b.iter(|| x + y));
            group.bench_function("sub", |b| b.iter(|| x - y));
            group.bench_function("mul", |b| b.iter(|| x * y));
            group.bench_function("neg", |b| b.iter(|| -x));
            group.bench_function("square", |b| b.iter(|| x.square()));
            group.bench_function("invert", |b| b.iter(|| x.invert()));
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt(&params)));
            group.finish();
        }
    };
}

/// Implement all tests for a field given an expression evaluating to its
/// [`FieldParams`](crate::FieldParams).
#[macro_export]
macro_rules! test_primefield {
    ($params:expr) => {
        $crate::test_field_identity!($params);
        $crate::test_field_invert!($params);
        $crate::test_field_sqrt!($params);
        $crate::test_field_encoding!($params);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($params:expr) => {
        #[test]
        fn zero_is_additive_identity() {
            let params = $params;
            let zero = $crate::FieldElement::zero(&params);
            let one = $crate::FieldElement::one(&params);
            assert_eq!(zero + zero, zero);
            assert_eq!(one + zero, one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let params = $params;
            let one = $crate::FieldElement::one(&params);
            assert_eq!(one * one, one);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($params:expr) => {
        #[test]
        fn invert() {
            let params = $params;
            let one = $crate::FieldElement::one(&params);
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);

            let zero = $crate::FieldElement::zero(&params);
            assert!(bool::from(zero.invert().is_none()));
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($params:expr) => {
        #[test]
        fn sqrt() {
            let params = $params;
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $crate::FieldElement::from_u64(&params, n);
                let sqrt = fe.sqrt(&params).unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }
    };
}

/// Implement field element encoding tests.
#[macro_export]
macro_rules! test_field_encoding {
    ($params:expr) => {
        #[test]
        fn encoding() {
            let params = $params;
            let minus_one = -$crate::FieldElement::one(&params);
            let bytes = minus_one.to_be_bytes();
            assert_eq!(bytes.len(), params.byte_len());

            let decoded = $crate::FieldElement::from_be_bytes(&params, &bytes).unwrap();
            assert_eq!(decoded, minus_one);

            let overflow = $crate::FieldElement::from_uint(&params, params.modulus());
            assert!(bool::from(overflow.is_none()));
        }
    };
}
