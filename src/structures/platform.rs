/// The on-disk layout Discord uses on a given operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Linux,
  Windows,
  MacOs,
}
