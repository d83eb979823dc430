#![allow(non_snake_case)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use koblitz::scalar::random_scalar;
use koblitz::{secp256k1, Curve};

mod point_benches {
    use super::*;

    use koblitz::jacobian::JacobianPoint;

    fn jacobian_add(c: &mut Criterion) {
        let G = JacobianPoint::generator();
        let P = G.double().double() + G;
        let Q = P.double();
        let two_G = G.double().to_affine().to_jacobian();
        c.bench_function("Jacobian addition, generic", move |b| b.iter(|| &P + &Q));
        c.bench_function("Jacobian addition, Z1 = Z2 = 1", move |b| b.iter(|| &G + &two_G));
        c.bench_function("Jacobian addition, Z2 = 1", move |b| b.iter(|| &P + &G));
    }

    fn jacobian_double(c: &mut Criterion) {
        let P = JacobianPoint::generator().double();
        c.bench_function("Jacobian doubling", move |b| b.iter(|| P.double()));
    }

    fn affine_add(c: &mut Criterion) {
        let curve = secp256k1();
        let P = curve.scalar_base_mult(&[0x11; 32]);
        let Q = curve.scalar_base_mult(&[0x22; 32]);
        c.bench_function("Affine addition", move |b| b.iter(|| curve.add(&P, &Q)));
    }

    criterion_group! {
        name = point_benches;
        config = Criterion::default();
        targets =
        jacobian_add,
        jacobian_double,
        affine_add,
    }
}

mod scalar_mul_benches {
    use super::*;

    fn variable_base_scalar_mul(c: &mut Criterion) {
        let curve = secp256k1();
        let P = curve.scalar_base_mult(&[0x5a; 32]);
        let mut rng = StdRng::seed_from_u64(1);
        c.bench_function("Variable-base scalar mul", move |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| curve.scalar_mult(&P, &k),
                BatchSize::SmallInput,
            )
        });
    }

    fn fixed_base_scalar_mul(c: &mut Criterion) {
        let curve = secp256k1();
        let mut rng = StdRng::seed_from_u64(2);
        c.bench_function("Fixed-base scalar mul", move |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| curve.scalar_base_mult(&k),
                BatchSize::SmallInput,
            )
        });
    }

    criterion_group! {
        name = scalar_mul_benches;
        config = Criterion::default();
        targets =
        variable_base_scalar_mul,
        fixed_base_scalar_mul,
    }
}

mod scalar_benches {
    use super::*;

    use koblitz::scalar::naf;
    use num_bigint::BigUint;

    fn naf_recoding(c: &mut Criterion) {
        let k = random_scalar(&mut StdRng::seed_from_u64(3));
        c.bench_function("NAF recoding", move |b| b.iter(|| naf(black_box(&k))));
    }

    fn endomorphism_split(c: &mut Criterion) {
        let endomorphism = secp256k1().endomorphism();
        let k = BigUint::from_bytes_be(&random_scalar(&mut StdRng::seed_from_u64(4)));
        c.bench_function("Endomorphism split", move |b| {
            b.iter(|| endomorphism.split(black_box(&k)))
        });
    }

    criterion_group! {
        name = scalar_benches;
        config = Criterion::default();
        targets =
        naf_recoding,
        endomorphism_split,
    }
}

mod field_benches {
    use super::*;

    use koblitz::field::FieldElement;

    fn field_inversion(c: &mut Criterion) {
        let x = FieldElement::from(897987897u64);
        c.bench_function("Field inversion", move |b| b.iter(|| black_box(&x).invert()));
    }

    fn batch_field_inversion(c: &mut Criterion) {
        let inputs: Vec<FieldElement> = (1..=64u64).map(FieldElement::from).collect();
        c.bench_function("Batch field inversion, 64 elements", move |b| {
            b.iter_batched(
                || inputs.clone(),
                |mut xs| FieldElement::batch_invert(&mut xs),
                BatchSize::SmallInput,
            )
        });
    }

    criterion_group! {
        name = field_benches;
        config = Criterion::default();
        targets =
        field_inversion,
        batch_field_inversion,
    }
}

criterion_main!(
    point_benches::point_benches,
    scalar_mul_benches::scalar_mul_benches,
    scalar_benches::scalar_benches,
    field_benches::field_benches,
);
