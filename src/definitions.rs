/// A keypad-entered expression rarely produces more tokens than this, so
/// token buffers of this size stay on the stack.
pub const N_TOKENS_ON_STACK: usize = 32;
