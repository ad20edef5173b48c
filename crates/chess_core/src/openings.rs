//! The fixed list of openings shown in the Openings tab.

/// A named opening line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opening {
    pub name: &'static str,
    /// Main line in SAN, without move numbers.
    pub moves: &'static [&'static str],
    pub description: &'static str,
}

pub static OPENINGS: [Opening; 5] = [
    Opening {
        name: "Sicilian Defense",
        moves: &["e4", "c5"],
        description: "Sharp, asymmetrical opening that gives Black good counterplay",
    },
    Opening {
        name: "Queen's Gambit",
        moves: &["d4", "d5", "c4"],
        description: "White offers a pawn to gain central control",
    },
    Opening {
        name: "Ruy Lopez",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5"],
        description: "One of the oldest and most respected openings",
    },
    Opening {
        name: "French Defense",
        moves: &["e4", "e6"],
        description: "Solid choice for Black leading to closed positions",
    },
    Opening {
        name: "King's Indian Defense",
        moves: &["d4", "Nf6", "c4", "g6"],
        description: "Hypermodern opening allowing White center control initially",
    },
];

impl Opening {
    /// Main line with move numbers, e.g. `1. e4 e5 2. Nf3`.
    pub fn line(&self) -> String {
        let mut out = String::new();
        for (i, san) in self.moves.iter().enumerate() {
            if i % 2 == 0 {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{}. ", i / 2 + 1));
            } else {
                out.push(' ');
            }
            out.push_str(san);
        }
        out
    }

    /// Whether the moves played so far agree with this line.
    ///
    /// Check and mate suffixes on the played moves are ignored. An empty game
    /// matches nothing.
    pub fn matches<S: AsRef<str>>(&self, played: &[S]) -> bool {
        !played.is_empty()
            && played
                .iter()
                .zip(self.moves.iter())
                .all(|(p, m)| p.as_ref().trim_end_matches(['+', '#']) == *m)
    }
}

/// Openings consistent with the moves played so far.
pub fn matching_openings<S: AsRef<str>>(played: &[S]) -> Vec<&'static Opening> {
    OPENINGS.iter().filter(|o| o.matches(played)).collect()
}
