pub mod choreography;
pub mod library;
pub mod walk;

use crate::animation::choreography::Choreography;
use crate::error::IdleError;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Position of an entry in the catalog, `0..catalog.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(pub usize);

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mood {
    Subtle,
    Expressive,
    Playful,
    Dramatic,
}

impl Mood {
    /// Subtle animations are the most likely, dramatic ones the least
    pub fn weight(self) -> u32 {
        match self {
            Mood::Subtle => 5,
            Mood::Expressive => 3,
            Mood::Playful => 2,
            Mood::Dramatic => 1,
        }
    }
}

/// The idle animations of the reference catalog, in catalog order.
///
/// Parses from either the full name or the short console name, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Animation {
    Breathing,
    WeightShift,
    LookAround,
    Stretch,
    ShakeOff,
    Yawn,
    TapFoot,
    Wave,
    #[strum(to_string = "DanceWiggle", serialize = "dance")]
    DanceWiggle,
    #[strum(to_string = "CuriousPeek", serialize = "curious")]
    CuriousPeek,
    #[strum(to_string = "HappyBounce", serialize = "bounce")]
    HappyBounce,
    Startle,
    #[strum(to_string = "PounceReady", serialize = "pounce")]
    PounceReady,
    #[strum(to_string = "VictoryPose", serialize = "victory")]
    VictoryPose,
    #[strum(to_string = "DrumFingers", serialize = "drum")]
    DrumFingers,
    #[strum(to_string = "StandTall", serialize = "tall")]
    StandTall,
    LieDown,
    #[strum(to_string = "AllLegTwitch", serialize = "twitch")]
    AllLegTwitch,
}

impl Animation {
    pub fn id(self) -> AnimationId {
        AnimationId(self as usize)
    }

    pub fn from_id(id: AnimationId) -> Option<Animation> {
        Animation::iter().nth(id.0)
    }

    pub fn mood(self) -> Mood {
        use Animation::*;
        match self {
            Breathing | WeightShift | LookAround => Mood::Subtle,
            Stretch | ShakeOff | Yawn | TapFoot => Mood::Expressive,
            Wave | DanceWiggle | CuriousPeek | HappyBounce => Mood::Playful,
            Startle | PounceReady | VictoryPose | DrumFingers | StandTall | LieDown
            | AllLegTwitch => Mood::Dramatic,
        }
    }

    pub fn weight(self) -> u32 {
        self.mood().weight()
    }

    /// What to type on the console to play it.
    pub fn command(self) -> String {
        use Animation::*;
        match self {
            DanceWiggle => "dance".to_string(),
            CuriousPeek => "curious".to_string(),
            HappyBounce => "bounce".to_string(),
            PounceReady => "pounce".to_string(),
            VictoryPose => "victory".to_string(),
            DrumFingers => "drum".to_string(),
            StandTall => "tall".to_string(),
            AllLegTwitch => "twitch".to_string(),
            _ => self.to_string().to_lowercase(),
        }
    }
}

pub struct CatalogEntry {
    pub id: AnimationId,
    pub name: String,
    pub weight: u32,
    pub choreography: Box<dyn Choreography>,
}

impl Debug for CatalogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Fixed, ordered registry of animations.
///
/// Ids are assigned by position, so every id in `0..len()` has exactly one
/// entry. Nothing can change an entry once the catalog is built.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            entries: Vec::new(),
        }
    }

    /// All idle animations with their mood weights.
    pub fn reference() -> Self {
        Animation::iter()
            .fold(Catalog::builder(), |builder, animation| {
                builder.entry(
                    animation.to_string(),
                    animation.weight(),
                    library::for_animation(animation),
                )
            })
            .build()
    }

    /// The reference catalog with some weights replaced, keyed by animation name.
    pub fn reference_with_weights(weights: &BTreeMap<String, u32>) -> Result<Self, IdleError> {
        let mut overrides = BTreeMap::new();
        for (name, weight) in weights {
            let animation = Animation::from_str(name)
                .map_err(|_| IdleError::UnknownAnimation(name.clone()))?;
            overrides.insert(animation.id(), *weight);
        }
        let mut catalog = Catalog::reference();
        for entry in &mut catalog.entries {
            if let Some(weight) = overrides.get(&entry.id) {
                entry.weight = *weight;
            }
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: AnimationId) -> Option<&CatalogEntry> {
        self.entries.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn entry(
        mut self,
        name: impl Into<String>,
        weight: u32,
        choreography: impl Choreography + 'static,
    ) -> Self {
        self.entries.push(CatalogEntry {
            id: AnimationId(self.entries.len()),
            name: name.into(),
            weight,
            choreography: Box::new(choreography),
        });
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.len(), 18);
        let weights: Vec<u32> = catalog.entries().iter().map(|entry| entry.weight).collect();
        assert_eq!(
            weights,
            vec![5, 5, 5, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1]
        );
        for (index, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.id, AnimationId(index));
            assert_eq!(Animation::from_id(entry.id).map(|a| a.to_string()), Some(entry.name.clone()));
        }
    }

    #[test]
    fn test_names_parse() {
        assert_eq!(Animation::from_str("breathing"), Ok(Animation::Breathing));
        assert_eq!(Animation::from_str("WeightShift"), Ok(Animation::WeightShift));
        assert_eq!(Animation::from_str("dance"), Ok(Animation::DanceWiggle));
        assert_eq!(Animation::from_str("DanceWiggle"), Ok(Animation::DanceWiggle));
        assert_eq!(Animation::from_str("twitch"), Ok(Animation::AllLegTwitch));
        assert!(Animation::from_str("moonwalk").is_err());
    }

    #[test]
    fn test_commands_parse_back() {
        for animation in Animation::iter() {
            assert_eq!(Animation::from_str(&animation.command()), Ok(animation));
        }
        assert_eq!(Animation::PounceReady.command(), "pounce");
        assert_eq!(Animation::WeightShift.command(), "weightshift");
    }

    #[test]
    fn test_weight_overrides() {
        let weights = BTreeMap::from([("LieDown".to_string(), 0), ("wave".to_string(), 9)]);
        let catalog = Catalog::reference_with_weights(&weights).expect("valid names");
        assert_eq!(catalog.entry(Animation::LieDown.id()).map(|e| e.weight), Some(0));
        assert_eq!(catalog.entry(Animation::Wave.id()).map(|e| e.weight), Some(9));
        assert_eq!(catalog.entry(Animation::Yawn.id()).map(|e| e.weight), Some(3));

        let unknown = BTreeMap::from([("moonwalk".to_string(), 2)]);
        assert!(matches!(
            Catalog::reference_with_weights(&unknown),
            Err(IdleError::UnknownAnimation(name)) if name == "moonwalk"
        ));
    }

    #[test]
    fn test_every_animation_has_a_bounded_routine() {
        for animation in Animation::iter() {
            let routine = library::for_animation(animation);
            assert_eq!(routine.name, animation.to_string());
            assert!(routine.duration().as_millis() <= 3000, "{} too long", animation);
        }
    }
}
