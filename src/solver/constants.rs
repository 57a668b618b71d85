/// Inputs longer than this are searched anyway, with a warning: the number of
/// subbags grows factorially with the input length.
pub const LARGE_INPUT_THRESHOLD: usize = 8;
