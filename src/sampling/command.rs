/// Operator commands arriving as single ASCII bytes on the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum Command {
    /// `'p'`: hold emission until `'s'`.
    Pause,
    /// `'s'`: leave the paused sub-loop. Ignored outside of it.
    Resume,
    /// `'r'`: run a calibration event this cycle.
    Recalibrate,
}

impl Command {
    /// Unknown bytes map to `None` and are ignored by the loop.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'p' => Some(Command::Pause),
            b's' => Some(Command::Resume),
            b'r' => Some(Command::Recalibrate),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Command::Pause => b'p',
            Command::Resume => b's',
            Command::Recalibrate => b'r',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_bytes() {
        assert_eq!(Command::from_byte(b'p'), Some(Command::Pause));
        assert_eq!(Command::from_byte(b's'), Some(Command::Resume));
        assert_eq!(Command::from_byte(b'r'), Some(Command::Recalibrate));
    }

    #[test]
    fn host_side_bytes() {
        assert_eq!(Command::Resume.byte(), b's');
        assert_eq!(Command::Pause.byte(), b'p');
    }

    #[test]
    fn other_bytes_are_ignored() {
        for byte in [b'P', b'R', b'\n', b'\r', b' ', b'x', 0u8, 0xFF] {
            assert_eq!(Command::from_byte(byte), None);
        }
    }
}
