use num_traits::Float;

/// Sign tests against an absolute tolerance: values within `eps` of zero count as zero.
pub trait IsZero {
    fn is_zero_eps(&self, eps: Self) -> bool;
    fn gt_zero_eps(&self, eps: Self) -> bool;
    fn lt_zero_eps(&self, eps: Self) -> bool;
}

impl<D: Float> IsZero for D {
    fn is_zero_eps(&self, eps: D) -> bool {
        self.abs() <= eps
    }
    fn gt_zero_eps(&self, eps: D) -> bool {
        *self > eps
    }
    fn lt_zero_eps(&self, eps: D) -> bool {
        *self < -eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EPS: f64 = f64::EPSILON;

    #[test]
    fn boundaries() {
        assert!(0f64.is_zero_eps(EPS));
        assert!((-0f64).is_zero_eps(EPS));
        assert!(EPS.is_zero_eps(EPS));
        assert!((-EPS).is_zero_eps(EPS));
        assert!(!(2. * EPS).is_zero_eps(EPS));

        assert!(!EPS.gt_zero_eps(EPS));
        assert!((2. * EPS).gt_zero_eps(EPS));
        assert!(!(-EPS).lt_zero_eps(EPS));
        assert!((-2. * EPS).lt_zero_eps(EPS));
    }

    #[test]
    fn exactly_one_holds() {
        for v in [ -1f64, -3e-16, -2.2e-16, 0., 1e-17, 2.2e-16, 3e-16, 1. ] {
            let n = [ v.lt_zero_eps(EPS), v.is_zero_eps(EPS), v.gt_zero_eps(EPS) ].into_iter().filter(|b| *b).count();
            assert_eq!(n, 1, "{}", v);
        }
    }

    #[test]
    fn nan_is_nothing() {
        let nan = f64::NAN;
        assert!(!nan.is_zero_eps(EPS));
        assert!(!nan.gt_zero_eps(EPS));
        assert!(!nan.lt_zero_eps(EPS));
    }
}
