use gravfield::{dist, AccelerationLaw, Body, Field, NVec3, NewtonianGravity, Source, TrajectoryBuffer};
use proptest::prelude::*;

fn vec3() -> impl Strategy<Value = NVec3> {
    (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y, z)| NVec3::new(x, y, z))
}

proptest! {
    /// A buffer of capacity N fed k samples holds the last min(k, N) of them, in order
    #[test]
    fn prop_trajectory_keeps_last_samples(cap in 1usize..64, k in 0usize..200) {
        let mut buf = TrajectoryBuffer::new(cap);
        for i in 0..k {
            buf.push(NVec3::new(i as f64, 0.0, 0.0));
        }
        let kept = k.min(cap);
        prop_assert_eq!(buf.len(), kept);

        let expected: Vec<f64> = ((k - kept)..k).map(|i| i as f64).collect();
        let got: Vec<f64> = buf.iter().map(|p| p.x).collect();
        prop_assert_eq!(got, expected);
    }

    /// A point never accelerates itself
    #[test]
    fn prop_self_interaction_is_zero(p in vec3(), mass in 1e-3f64..1e30, g in 1e-12f64..1e3) {
        let law = NewtonianGravity::new(g);
        let a = law.acceleration(&p, &[Source { mass, position: p }]);
        prop_assert_eq!(a, NVec3::zeros());
    }

    #[test]
    fn prop_distance_symmetric_non_negative(a in vec3(), b in vec3()) {
        prop_assert!(dist(&a, &b) >= 0.0);
        prop_assert_eq!(dist(&a, &b), dist(&b, &a));
    }

    /// Swapping the two bodies of a field swaps the results and nothing else
    #[test]
    fn prop_two_body_update_order_independent(
        x1 in vec3(), x2 in vec3(), v1 in vec3(), v2 in vec3(),
        m1 in 1e-2f64..1e2, m2 in 1e-2f64..1e2,
    ) {
        prop_assume!(dist(&x1, &x2) > 1e-3);
        let a = Body::new(m1, x1, v1 * 1e-3);
        let b = Body::new(m2, x2, v2 * 1e-3);

        let mut f1 = Field::new(&[a, b], 1.0, 1e-3).unwrap();
        let mut f2 = Field::new(&[b, a], 1.0, 1e-3).unwrap();
        f1.update();
        f2.update();

        prop_assert_eq!(f1.points()[0].state(), f2.points()[1].state());
        prop_assert_eq!(f1.points()[1].state(), f2.points()[0].state());
    }
}
