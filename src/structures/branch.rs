/// Release channel of a Discord install
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
  Stable,
  Canary,
  PTB,
}
