//! Development-related functionality.

/// Implement group law tests for a curve given as an expression evaluating to
/// [`PrimeCurveParams`][`crate::PrimeCurveParams`].
///
/// The calling crate needs `proptest` as a dev-dependency.
#[macro_export]
macro_rules! test_curve_arithmetic {
    ($name:ident, $curve:expr) => {
        mod $name {
            use super::*;
            use $crate::{AffinePoint, FieldElement, ProjectivePoint, Uint};

            #[test]
            fn affine_to_projective() {
                let curve = $curve;
                let basepoint_affine = AffinePoint::generator(&curve);
                let basepoint_projective = ProjectivePoint::generator(&curve);

                assert_eq!(ProjectivePoint::from(basepoint_affine), basepoint_projective);
                assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
                assert!(!bool::from(basepoint_projective.to_affine().is_identity()));
                assert!(bool::from(
                    ProjectivePoint::identity(&curve).to_affine().is_identity()
                ));
            }

            #[test]
            fn projective_identity_addition() {
                let curve = $curve;
                let identity = ProjectivePoint::identity(&curve);
                let generator = ProjectivePoint::generator(&curve);

                assert_eq!(identity + &generator, generator);
                assert_eq!(generator + &identity, generator);
                assert_eq!(identity + &identity, identity);
                assert!(bool::from(identity.double().is_identity()));
            }

            #[test]
            fn projective_mixed_addition() {
                let curve = $curve;
                let identity = ProjectivePoint::identity(&curve);
                let basepoint_affine = AffinePoint::generator(&curve);
                let basepoint_projective = ProjectivePoint::generator(&curve);

                assert_eq!(identity + &basepoint_affine, basepoint_projective);
                assert_eq!(
                    basepoint_projective + &basepoint_affine,
                    basepoint_projective + &basepoint_projective
                );
                assert_eq!(
                    basepoint_projective + &AffinePoint::identity(&curve),
                    basepoint_projective
                );
            }

            #[test]
            fn projective_add_vs_double() {
                let curve = $curve;
                let generator = ProjectivePoint::generator(&curve);
                let four = generator.double().double();

                assert_eq!(generator + &generator, generator.double());
                assert_eq!(
                    generator + &generator + &generator + &generator,
                    four
                );
                assert_eq!(four.to_affine().to_projective(), four);
            }

            #[test]
            fn projective_add_and_sub() {
                let curve = $curve;
                let basepoint_affine = AffinePoint::generator(&curve);
                let basepoint_projective = ProjectivePoint::generator(&curve);

                assert_eq!(
                    (basepoint_projective + &basepoint_projective) - &basepoint_projective,
                    basepoint_projective
                );
                assert_eq!(
                    (basepoint_projective + &basepoint_affine) - &basepoint_affine,
                    basepoint_projective
                );
                assert!(bool::from(
                    (basepoint_projective - &basepoint_projective).is_identity()
                ));
                assert!(bool::from(
                    (basepoint_projective + &-basepoint_projective).is_identity()
                ));
            }

            #[test]
            fn repeated_add_matches_multiplication() {
                let curve = $curve;
                let generator = ProjectivePoint::generator(&curve);
                let mut p = ProjectivePoint::identity(&curve);

                for k in 0..40u8 {
                    assert_eq!(generator.mul_uint(&Uint::from_u8(k)), p);
                    p += &generator;
                }
            }

            #[test]
            fn order_times_generator_is_identity() {
                let curve = $curve;
                let generator = ProjectivePoint::generator(&curve);

                assert!(bool::from(generator.mul_uint(curve.order()).is_identity()));

                let minus_one = -FieldElement::one(curve.scalar_params());
                assert_eq!(generator.mul(&minus_one), -generator);
            }

            ::proptest::proptest! {
                #![proptest_config(::proptest::prelude::ProptestConfig::with_cases(16))]

                #[test]
                fn order_annihilates_random_points(
                    bytes in ::proptest::collection::vec(
                        ::proptest::prelude::any::<u8>(),
                        $crate::primefield::MAX_FIELD_BYTES,
                    )
                ) {
                    let curve = $curve;
                    let k = FieldElement::from_uint_reduced(
                        curve.scalar_params(),
                        &Uint::from_be_slice(&bytes),
                    );
                    let point = ProjectivePoint::mul_by_generator(&curve, &k);

                    ::proptest::prop_assert!(bool::from(point.mul_uint(curve.order()).is_identity()));

                    let minus_one = -FieldElement::one(curve.scalar_params());
                    ::proptest::prop_assert_eq!(point.mul(&minus_one), -point);
                }
            }

            #[test]
            fn scalar_multiplication_is_linear() {
                let curve = $curve;
                let scalars = curve.scalar_params();
                let generator = ProjectivePoint::generator(&curve);

                let a = FieldElement::from_u64(scalars, 0xdead_beef_0bad_cafe);
                let b = -FieldElement::from_u64(scalars, 0x0123_4567);

                assert_eq!(
                    generator.mul(&a) + &generator.mul(&b),
                    generator.mul(&(a + b))
                );
                assert_eq!(generator.mul(&a).mul(&b), generator.mul(&(a * b)));
                assert_eq!(
                    ProjectivePoint::mul_by_generator(&curve, &a),
                    generator * &a
                );
            }

            #[test]
            fn sec1_round_trip() {
                let curve = $curve;
                let generator = ProjectivePoint::generator(&curve);
                let mut p = generator;

                for _ in 0..8 {
                    let affine = p.to_affine();
                    for compress in [false, true] {
                        let encoded = affine.to_encoded_point(compress);
                        let decoded =
                            AffinePoint::from_sec1_bytes(&curve, encoded.as_bytes()).unwrap();
                        assert_eq!(decoded, affine);
                    }
                    p = p.double() + &generator;
                }
            }
        }
    };
}
