/// Bits of a wall's first flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallFlags {
    /// The adjoin has a drawn mid texture. The sectors stay logically
    /// connected but the opening is visually blocked, so rays stop here
    AdjoinMidTexture = 1,
    /// Sign texture is fullbright
    IlluminatedSign = 1 << 1,
    /// Textures are mirrored horizontally
    FlipHorizontal = 1 << 2,
    /// Wall light follows the sector's light changes
    ChangeWallLight = 1 << 3,
    /// Texture offsets are relative to the sector floor, so they move with
    /// an elevator instead of sliding over the wall
    TextureAnchored = 1 << 4,
    /// Vertices move with a morphing elevator
    WallMorphs = 1 << 5,
    ScrollTopTexture = 1 << 6,
    ScrollMidTexture = 1 << 7,
    ScrollBottomTexture = 1 << 8,
    ScrollSignTexture = 1 << 9,
    /// Never shown on the automap
    HideOnMap = 1 << 10,
    /// Shown as a normal wall on the automap even when adjoined
    ShowNormalOnMap = 1 << 11,
    /// Sign moves with the wall texture
    SignAnchored = 1 << 12,
    /// Touching the wall hurts
    DamageWall = 1 << 13,
    ShowAsLedgeOnMap = 1 << 14,
    ShowAsDoorOnMap = 1 << 15,
}

/// Bits of a sector's first flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorFlags {
    /// Ceiling is sky
    Exterior = 1,
    /// Sector is a basic door, opened by nudging it
    Door = 1 << 1,
    /// Blasters bounce off the walls
    MagSeal = 1 << 2,
    /// Adjoining exterior ceilings are drawn as one sky
    ExteriorAdjoin = 1 << 3,
    IceFloor = 1 << 4,
    SnowFloor = 1 << 5,
    /// Walls can be blown open
    ExplodingWall = 1 << 6,
    /// Floor is sky
    Pit = 1 << 7,
    ExteriorFloorAdjoin = 1 << 8,
    /// Elevators crush rather than bounce back
    Crushing = 1 << 9,
    NoWallDraw = 1 << 10,
    LowDamage = 1 << 11,
    HighDamage = 1 << 12,
    NoSmartObject = 1 << 13,
    SmartObject = 1 << 14,
    Subsector = 1 << 15,
    SafeSector = 1 << 16,
    /// Counted towards the secrets found total when entered
    Secret = 1 << 19,
}

#[cfg(test)]
mod tests {
    use super::{SectorFlags, WallFlags};

    #[test]
    fn flag_bits() {
        let flags = 0b1000_0000_0000_0001u32;
        assert_ne!(flags & WallFlags::AdjoinMidTexture as u32, 0);
        assert_ne!(flags & WallFlags::ShowAsDoorOnMap as u32, 0);
        assert_eq!(flags & WallFlags::HideOnMap as u32, 0);

        assert_eq!(SectorFlags::Secret as u32, 0x80000);
        assert_eq!(SectorFlags::Door as u32, 2);
    }
}
