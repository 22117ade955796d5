//! Enumerations packed into a SteamID64

/// Steam universe (top 8 bits of a SteamID64)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Universe {
    Invalid,
    Public,
    Beta,
    Internal,
    Dev,
}

impl Universe {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::Public),
            2 => Some(Self::Beta),
            3 => Some(Self::Internal),
            4 => Some(Self::Dev),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Invalid => 0,
            Self::Public => 1,
            Self::Beta => 2,
            Self::Internal => 3,
            Self::Dev => 4,
        }
    }
}

/// Account type (bits 52-55 of a SteamID64)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Invalid,
    Individual,
    Multiseat,
    GameServer,
    AnonGameServer,
    Pending,
    ContentServer,
    Clan,
    Chat,
    P2PSuperSeeder,
    AnonUser,
}

impl AccountType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::Individual),
            2 => Some(Self::Multiseat),
            3 => Some(Self::GameServer),
            4 => Some(Self::AnonGameServer),
            5 => Some(Self::Pending),
            6 => Some(Self::ContentServer),
            7 => Some(Self::Clan),
            8 => Some(Self::Chat),
            9 => Some(Self::P2PSuperSeeder),
            10 => Some(Self::AnonUser),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Invalid => 0,
            Self::Individual => 1,
            Self::Multiseat => 2,
            Self::GameServer => 3,
            Self::AnonGameServer => 4,
            Self::Pending => 5,
            Self::ContentServer => 6,
            Self::Clan => 7,
            Self::Chat => 8,
            Self::P2PSuperSeeder => 9,
            Self::AnonUser => 10,
        }
    }

    /// Letter used in the Steam3 rendering.
    ///
    /// Chat IDs are refined to `c` or `L` by their instance flags at render time.
    pub fn steam3_char(self) -> char {
        match self {
            Self::Invalid => 'I',
            Self::Individual => 'U',
            Self::Multiseat => 'M',
            Self::GameServer => 'G',
            Self::AnonGameServer => 'A',
            Self::Pending => 'P',
            Self::ContentServer => 'C',
            Self::Clan => 'g',
            Self::Chat => 'T',
            Self::P2PSuperSeeder => 'i',
            Self::AnonUser => 'a',
        }
    }

    pub(crate) fn from_steam3_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Invalid),
            'U' => Some(Self::Individual),
            'M' => Some(Self::Multiseat),
            'G' => Some(Self::GameServer),
            'A' => Some(Self::AnonGameServer),
            'P' => Some(Self::Pending),
            'C' => Some(Self::ContentServer),
            'g' => Some(Self::Clan),
            'T' => Some(Self::Chat),
            'a' => Some(Self::AnonUser),
            _ => None,
        }
    }
}

/// Well-known instance values
pub struct Instance;

impl Instance {
    pub const ALL: u32 = 0;
    pub const DESKTOP: u32 = 1;
    pub const CONSOLE: u32 = 2;
    pub const WEB: u32 = 4;
}

/// Flags carried in the instance field of chat IDs
pub struct ChatInstanceFlags;

impl ChatInstanceFlags {
    pub const CLAN: u32 = 0x0008_0000;
    pub const LOBBY: u32 = 0x0004_0000;
    pub const MMS_LOBBY: u32 = 0x0002_0000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_u8_mapping_is_reversible() {
        for raw in 0..=10u8 {
            let kind = AccountType::from_u8(raw).unwrap();
            assert_eq!(kind.as_u8(), raw);
        }
        assert!(AccountType::from_u8(11).is_none());
    }

    #[test]
    fn test_steam3_chars() {
        assert_eq!(AccountType::from_steam3_char('U'), Some(AccountType::Individual));
        assert_eq!(AccountType::from_steam3_char('g'), Some(AccountType::Clan));
        assert_eq!(AccountType::Clan.steam3_char(), 'g');
        // 'c' and 'L' are chat aliases handled by the parser, not plain types
        assert!(AccountType::from_steam3_char('c').is_none());
        assert!(AccountType::from_steam3_char('x').is_none());
    }

    #[test]
    fn test_universe_range() {
        assert_eq!(Universe::from_u8(1), Some(Universe::Public));
        assert!(Universe::from_u8(5).is_none());
    }
}
