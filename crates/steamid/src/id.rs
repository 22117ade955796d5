//! The SteamID value type

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Result, SteamIdError};
use crate::kind::{AccountType, ChatInstanceFlags, Instance, Universe};

const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;
const INSTANCE_MASK: u32 = 0x000F_FFFF;
const INSTANCE_SHIFT: u32 = 32;
const TYPE_SHIFT: u32 = 52;
const UNIVERSE_SHIFT: u32 = 56;

static STEAM2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^STEAM_([0-5]):([0-1]):([0-9]+)$").unwrap());

static STEAM3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([a-zA-Z]):([0-5]):([0-9]+)(?::([0-9]+))?\]$").unwrap());

/// A Steam account identifier, stored as its canonical 64-bit value
///
/// The decimal rendering of the 64-bit value is what the Web API accepts and
/// returns. `Display` and serde both use that form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SteamId(u64);

impl SteamId {
    /// Wrap a raw SteamID64
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Pack the individual components into a SteamID64
    pub fn from_parts(
        universe: u8,
        account_type: AccountType,
        instance: u32,
        account_id: u32,
    ) -> Result<Self> {
        if instance > INSTANCE_MASK {
            return Err(SteamIdError::OutOfRange(format!("instance {instance}")));
        }
        Ok(Self(
            (u64::from(universe) << UNIVERSE_SHIFT)
                | (u64::from(account_type.as_u8()) << TYPE_SHIFT)
                | (u64::from(instance) << INSTANCE_SHIFT)
                | u64::from(account_id),
        ))
    }

    /// Public universe, individual account, desktop instance
    pub fn from_individual_account_id(account_id: u32) -> Self {
        Self(
            (u64::from(Universe::Public.as_u8()) << UNIVERSE_SHIFT)
                | (u64::from(AccountType::Individual.as_u8()) << TYPE_SHIFT)
                | (u64::from(Instance::DESKTOP) << INSTANCE_SHIFT)
                | u64::from(account_id),
        )
    }

    /// Parse a SteamID64 (`76561197960287930`), Steam2 (`STEAM_0:0:11101`) or
    /// Steam3 (`[U:1:22202]`) string.
    ///
    /// Only the grammar is checked. A SteamID64 string that fits in a `u64`
    /// always parses, even when [`SteamId::is_valid`] would reject it.
    pub fn parse(input: &str) -> Result<Self> {
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            return input
                .parse::<u64>()
                .map(Self)
                .map_err(|_| SteamIdError::OutOfRange(input.to_string()));
        }

        if let Some(caps) = STEAM2_RE.captures(input) {
            let mut universe: u8 = parse_component(input, &caps[1])?;
            if universe == Universe::Invalid.as_u8() {
                universe = Universe::Public.as_u8();
            }
            let low: u64 = parse_component(input, &caps[2])?;
            let high: u64 = parse_component(input, &caps[3])?;
            let account_id = high
                .checked_mul(2)
                .and_then(|v| v.checked_add(low))
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| SteamIdError::OutOfRange(input.to_string()))?;
            return Self::from_parts(
                universe,
                AccountType::Individual,
                Instance::DESKTOP,
                account_id,
            );
        }

        if let Some(caps) = STEAM3_RE.captures(input) {
            let letter = caps[1].chars().next().unwrap_or('I');
            let universe: u8 = parse_component(input, &caps[2])?;
            let account_id: u32 = parse_component(input, &caps[3])?;
            let explicit_instance = match caps.get(4) {
                Some(m) => Some(parse_component::<u32>(input, m.as_str())?),
                None => None,
            };

            let (account_type, instance) = match letter {
                'c' => (
                    AccountType::Chat,
                    explicit_instance.unwrap_or(Instance::ALL) | ChatInstanceFlags::CLAN,
                ),
                'L' => (
                    AccountType::Chat,
                    explicit_instance.unwrap_or(Instance::ALL) | ChatInstanceFlags::LOBBY,
                ),
                other => {
                    let account_type = AccountType::from_steam3_char(other)
                        .ok_or_else(|| SteamIdError::UnknownFormat(input.to_string()))?;
                    let default_instance = if account_type == AccountType::Individual {
                        Instance::DESKTOP
                    } else {
                        Instance::ALL
                    };
                    (account_type, explicit_instance.unwrap_or(default_instance))
                }
            };

            return Self::from_parts(universe, account_type, instance, account_id);
        }

        Err(SteamIdError::UnknownFormat(input.to_string()))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn account_id(&self) -> u32 {
        (self.0 & ACCOUNT_ID_MASK) as u32
    }

    pub fn instance(&self) -> u32 {
        ((self.0 >> INSTANCE_SHIFT) as u32) & INSTANCE_MASK
    }

    pub fn account_type_raw(&self) -> u8 {
        ((self.0 >> TYPE_SHIFT) & 0xF) as u8
    }

    /// Decoded account type, `None` for type values Steam does not define
    pub fn account_type(&self) -> Option<AccountType> {
        AccountType::from_u8(self.account_type_raw())
    }

    pub fn universe_raw(&self) -> u8 {
        (self.0 >> UNIVERSE_SHIFT) as u8
    }

    pub fn universe(&self) -> Option<Universe> {
        Universe::from_u8(self.universe_raw())
    }

    /// Whether the packed components describe an account Steam could issue
    pub fn is_valid(&self) -> bool {
        let account_type = match self.account_type() {
            Some(AccountType::Invalid) | None => return false,
            Some(t) => t,
        };

        match self.universe() {
            Some(Universe::Invalid) | None => return false,
            Some(_) => {}
        }

        match account_type {
            AccountType::Individual => {
                self.account_id() != 0 && self.instance() <= Instance::WEB
            }
            AccountType::Clan => self.account_id() != 0 && self.instance() == Instance::ALL,
            AccountType::GameServer => self.account_id() != 0,
            _ => true,
        }
    }

    /// Whether this is a group chat (clan chat) ID
    pub fn is_group_chat(&self) -> bool {
        self.account_type() == Some(AccountType::Chat)
            && self.instance() & ChatInstanceFlags::CLAN != 0
    }

    pub fn is_lobby(&self) -> bool {
        self.account_type() == Some(AccountType::Chat)
            && self.instance() & (ChatInstanceFlags::LOBBY | ChatInstanceFlags::MMS_LOBBY) != 0
    }

    /// Steam2 rendering (`STEAM_0:0:11101`), only defined for individual accounts
    pub fn steam2(&self) -> Option<String> {
        if self.account_type() != Some(AccountType::Individual) {
            return None;
        }
        let universe = match self.universe() {
            Some(Universe::Public) => 0,
            _ => self.universe_raw(),
        };
        let account_id = self.account_id();
        Some(format!(
            "STEAM_{}:{}:{}",
            universe,
            account_id & 1,
            account_id / 2
        ))
    }

    /// Steam3 rendering (`[U:1:22202]`)
    pub fn steam3(&self) -> String {
        let account_type = self.account_type();
        let instance = self.instance();

        let letter = if instance & ChatInstanceFlags::CLAN != 0 {
            'c'
        } else if instance & ChatInstanceFlags::LOBBY != 0 {
            'L'
        } else {
            account_type.map(AccountType::steam3_char).unwrap_or('i')
        };

        let render_instance = match account_type {
            Some(AccountType::AnonGameServer) | Some(AccountType::Multiseat) => true,
            Some(AccountType::Individual) => instance != Instance::DESKTOP,
            _ => false,
        };

        if render_instance {
            format!(
                "[{}:{}:{}:{}]",
                letter,
                self.universe_raw(),
                self.account_id(),
                instance
            )
        } else {
            format!("[{}:{}:{}]", letter, self.universe_raw(), self.account_id())
        }
    }
}

fn parse_component<T: FromStr>(input: &str, digits: &str) -> Result<T> {
    digits
        .parse::<T>()
        .map_err(|_| SteamIdError::OutOfRange(input.to_string()))
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SteamId").field(&self.0).finish()
    }
}

impl FromStr for SteamId {
    type Err = SteamIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for SteamId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SteamId> for u64 {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl Serialize for SteamId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts the decimal string the Web API sends, or a bare integer
impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SteamIdVisitor;

        impl<'de> Visitor<'de> for SteamIdVisitor {
            type Value = SteamId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a SteamID string or 64-bit integer")
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(SteamId(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v)
                    .map(SteamId)
                    .map_err(|_| de::Error::custom("negative SteamID"))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                SteamId::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(SteamIdVisitor)
    }
}
