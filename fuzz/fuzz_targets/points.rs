#![no_main]
// Decodes arbitrary bytes as points on every registered curve and checks that whatever is
// accepted behaves as a group element.
use ecdsa_engine::{
    CurveName, VerifyingKey,
    primefield::{FieldElement, MAX_FIELD_BYTES, Uint},
    primeorder::{AffinePoint, ProjectivePoint},
};
use libfuzzer_sys::fuzz_target;

fn test_group<'c>(p1: ProjectivePoint<'c>, p2: ProjectivePoint<'c>, s: &FieldElement) {
    let identity = ProjectivePoint::identity(p1.curve());
    let sum = p1 + &p2;

    // Test that addition and doubling are consistent
    assert!(p1.double() == p1 + &p1 - &identity);

    // Test that negation works correctly
    assert!(bool::from((sum + &-sum).is_identity()));

    // Test scalar multiplication distributive property
    let scalar_mul = p1 * s;
    assert!(scalar_mul + &scalar_mul == p1 * &s.double());

    // Test that the group order annihilates every point
    assert!(bool::from(sum.mul_uint(p1.curve().order()).is_identity()));
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let curve = CurveName::ALL[usize::from(selector) % CurveName::ALL.len()].curve();
    let params = curve.params();

    // SEC1 encoded point of any form
    let sec1 = AffinePoint::from_sec1_bytes(params, data);

    // raw `x || y`
    let raw = VerifyingKey::from_bytes(curve, data);

    // the identity is never a valid public key
    if let Ok(point) = &sec1 {
        let key = VerifyingKey::from_sec1_bytes(curve, data);
        assert_eq!(key.is_ok(), !bool::from(point.is_identity()));
    }

    if let Ok(key) = &raw {
        assert_eq!(VerifyingKey::from_bytes(curve, &key.to_bytes()).as_ref(), Ok(key));
        assert_eq!(
            VerifyingKey::from_sec1_bytes(curve, &key.to_sec1_bytes(true)).as_ref(),
            Ok(key)
        );
    }

    let mut padded = [0u8; MAX_FIELD_BYTES];
    let tail = &data[data.len().saturating_sub(curve.scalar_bytes())..];
    padded[MAX_FIELD_BYTES - tail.len()..].copy_from_slice(tail);
    let scalar = FieldElement::from_uint_reduced(params.scalar_params(), &Uint::from_be_slice(&padded));

    let p1 = sec1.map_or(ProjectivePoint::generator(params), |point| point.to_projective());
    let p2 = raw.map_or(ProjectivePoint::generator(params), |key| key.as_affine().to_projective());
    test_group(p1, p2, &scalar);
});
