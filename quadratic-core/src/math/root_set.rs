use derive_more::Deref;
use serde::Serialize;

/// Real roots in output order: for two roots, the "+" branch of the quadratic formula comes first.
#[derive(Clone, Debug, Default, Deref, PartialEq, Serialize)]
pub struct RootSet<D>(pub Vec<D>);

impl<D> RootSet<D> {
    pub fn into_vec(self) -> Vec<D> {
        self.0
    }
}

impl<D> From<RootSet<D>> for Vec<D> {
    fn from(roots: RootSet<D>) -> Self {
        roots.0
    }
}

impl<D: PartialEq> PartialEq<Vec<D>> for RootSet<D> {
    fn eq(&self, other: &Vec<D>) -> bool {
        &self.0 == other
    }
}
