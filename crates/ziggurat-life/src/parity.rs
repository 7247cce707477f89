/// Identifies one of the two ping-pong state buffers.
///
/// The active parity names the authoritative generation; `other()` names the
/// previous one, which a committing dispatch reads from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Parity {
    #[default]
    Even,
    Odd,
}

impl Parity {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> Parity {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    #[inline]
    pub fn flip(&mut self) {
        *self = self.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_alternates() {
        let mut p = Parity::default();
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                p.flip();
                p.index()
            })
            .collect();
        assert_eq!(seen, [1, 0, 1, 0, 1]);
    }

    #[test]
    fn other_is_involution() {
        assert_eq!(Parity::Even.other().other(), Parity::Even);
        assert_ne!(Parity::Odd.other(), Parity::Odd);
    }
}
