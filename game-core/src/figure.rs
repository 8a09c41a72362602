use game_types::MAX_WRONG_GUESSES;

/// Parts of the stick figure in the order they are drawn, one per wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    pub const ALL: [FigurePart; MAX_WRONG_GUESSES as usize] = [
        FigurePart::Head,
        FigurePart::Body,
        FigurePart::LeftArm,
        FigurePart::RightArm,
        FigurePart::LeftLeg,
        FigurePart::RightLeg,
    ];

    /// The part drawn when the reveal stage reaches `stage` (1-based)
    pub fn for_stage(stage: u8) -> Option<FigurePart> {
        let index = usize::from(stage).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Every part visible at a reveal stage; stages past the last part show the full figure
    pub fn visible_at(stage: u8) -> &'static [FigurePart] {
        let count = usize::from(stage).min(Self::ALL.len());
        &Self::ALL[..count]
    }

    pub fn name(self) -> &'static str {
        match self {
            FigurePart::Head => "head",
            FigurePart::Body => "body",
            FigurePart::LeftArm => "left arm",
            FigurePart::RightArm => "right arm",
            FigurePart::LeftLeg => "left leg",
            FigurePart::RightLeg => "right leg",
        }
    }
}
