// ── Physical port addressing ──
//
// The firmware enumerates the two SFP+ cages in the opposite order from the
// front-panel labels, so logical ports 9 and 10 trade wire addresses.

use crate::model::{PORT_COUNT, PortNumber};

/// Wire address per logical port, indexed by `port - 1`.
const WIRE_ADDRESS: [u8; PORT_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 10, 9];

/// Map a logical port number to the address the web API expects.
pub fn physical(port: PortNumber) -> u8 {
    WIRE_ADDRESS[usize::from(port.get() - PortNumber::MIN)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::port;

    #[test]
    fn identity_below_nine() {
        for p in 1..=8 {
            assert_eq!(physical(port(p)), p);
        }
    }

    #[test]
    fn sfp_ports_are_swapped() {
        assert_eq!(physical(port(9)), 10);
        assert_eq!(physical(port(10)), 9);
    }

    #[test]
    fn mapping_is_an_involution() {
        for p in PortNumber::all() {
            assert_eq!(physical(port(physical(p))), p.get());
        }
    }
}
