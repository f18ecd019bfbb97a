/*!
 * Scheduler Types
 * Policy identifiers and Round Robin quantum
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_QUANTUM, MAX_QUANTUM};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come-first-served by arrival time
    Fcfs,
    /// Non-preemptive shortest job first
    Sjf,
    /// Preemptive shortest job first (shortest remaining time first)
    Srtf,
    /// Non-preemptive priority
    Priority,
    /// Preemptive priority, re-evaluated every tick
    PreemptivePriority,
    /// Round-robin with fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    /// Canonical run order used by the driver
    pub const ALL: [SchedulingPolicy; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Priority,
        Self::PreemptivePriority,
        Self::RoundRobin,
    ];

    /// Machine-friendly identifier
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::PreemptivePriority => "preemptive_priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable algorithm name, as written to reports
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "Non-Preemptive SJF",
            Self::Srtf => "Preemptive SJF",
            Self::Priority => "Non-Preemptive Priority",
            Self::PreemptivePriority => "Preemptive Priority",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted before completion
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::PreemptivePriority | Self::RoundRobin
        )
    }
}

impl FromStr for SchedulingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "non_preemptive_sjf" => Ok(Self::Sjf),
            "srtf" | "preemptive_sjf" => Ok(Self::Srtf),
            "priority" | "prio" | "non_preemptive_priority" => Ok(Self::Priority),
            "preemptive_priority" | "pprio" => Ok(Self::PreemptivePriority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time quantum, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantum(Ticks);

impl Quantum {
    /// Create new quantum (1..=MAX_QUANTUM ticks)
    pub fn new(ticks: Ticks) -> Result<Self, ConfigError> {
        if ticks == 0 || ticks > MAX_QUANTUM {
            return Err(ConfigError::InvalidQuantum {
                quantum: ticks,
                max: MAX_QUANTUM,
            });
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}
