use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a participant joined the room, as reported by the real-time platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    #[default]
    Standard,
    Ingress,
    Egress,
    Sip,
    Agent,
}

impl ParticipantKind {
    pub fn is_telephony(self) -> bool {
        matches!(self, Self::Sip)
    }
}

/// Unrecognized kinds classify as `Standard`, which gets the general audio policy.
impl FromStr for ParticipantKind {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix("participant_kind_").unwrap_or(&normalized);
        Ok(match normalized {
            "sip" | "telephony" | "phone" => Self::Sip,
            "ingress" => Self::Ingress,
            "egress" => Self::Egress,
            "agent" => Self::Agent,
            _ => Self::Standard,
        })
    }
}

/// Noise-cancellation variant applied to a participant's audio input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioPolicyVariant {
    /// Tuned for narrowband phone audio.
    Telephony,
    General,
}

impl AudioPolicyVariant {
    /// Processor name the platform's noise-cancellation plugin expects.
    pub fn processor_name(self) -> &'static str {
        match self {
            Self::Telephony => "BVCTelephony",
            Self::General => "BVC",
        }
    }
}

impl fmt::Display for AudioPolicyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Telephony => "telephony",
            Self::General => "general",
        })
    }
}

pub fn select_audio_policy(kind: ParticipantKind) -> AudioPolicyVariant {
    if kind.is_telephony() {
        AudioPolicyVariant::Telephony
    } else {
        AudioPolicyVariant::General
    }
}

#[cfg(test)]
mod tests {
    use super::{select_audio_policy, AudioPolicyVariant, ParticipantKind};

    #[test]
    fn sip_participants_get_telephony_policy() {
        assert_eq!(select_audio_policy(ParticipantKind::Sip), AudioPolicyVariant::Telephony);
    }

    #[test]
    fn every_other_kind_gets_general_policy() {
        for kind in [
            ParticipantKind::Standard,
            ParticipantKind::Ingress,
            ParticipantKind::Egress,
            ParticipantKind::Agent,
        ] {
            assert_eq!(select_audio_policy(kind), AudioPolicyVariant::General, "{kind:?}");
        }
    }

    #[test]
    fn classification_parses_platform_spellings() {
        let parse = |value: &str| value.parse::<ParticipantKind>().unwrap_or_default();

        assert_eq!(parse("PARTICIPANT_KIND_SIP"), ParticipantKind::Sip);
        assert_eq!(parse("telephony"), ParticipantKind::Sip);
        assert_eq!(parse(" Sip "), ParticipantKind::Sip);
        assert_eq!(parse("participant_kind_agent"), ParticipantKind::Agent);
        assert_eq!(parse("webrtc"), ParticipantKind::Standard);
        assert_eq!(parse(""), ParticipantKind::Standard);
    }

    #[test]
    fn processor_names_match_plugin_variants() {
        assert_eq!(AudioPolicyVariant::Telephony.processor_name(), "BVCTelephony");
        assert_eq!(AudioPolicyVariant::General.processor_name(), "BVC");
    }
}
