use crate::channel::Channel;

/// Puts a channel pair into canonical (north, east) order.
///
/// `N`/`1` components always denote north and `E`/`2` always denote east,
/// whichever order they were selected in. Any other pair keeps the
/// selection order: first north-south, second east-west.
pub struct ChannelOrienter;

impl ChannelOrienter {
    fn is_north(code: char) -> bool {
        code == 'N' || code == '1'
    }

    fn is_east(code: char) -> bool {
        code == 'E' || code == '2'
    }

    /// Whether a pair selected as `(a, b)` has to be swapped.
    pub fn is_swapped(code_a: char, code_b: char) -> bool {
        (Self::is_north(code_b) && !Self::is_north(code_a))
            || (Self::is_east(code_a) && !Self::is_east(code_b))
    }

    pub fn orient<'a, C: Channel + ?Sized>(a: &'a C, b: &'a C) -> (&'a C, &'a C) {
        if Self::is_swapped(a.component(), b.component()) {
            (b, a)
        } else {
            (a, b)
        }
    }
}
