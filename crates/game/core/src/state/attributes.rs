use crate::tables::Attribute;

/// Player choices for a single attribute.
///
/// `assigned_chunk` holds the points taken from the distribution model: a
/// chunk value under a chunk model, or the typed amount under free points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AttributeState {
    /// Folk base value (typically 4-15).
    pub base: i32,
    /// Sum of modifiers from environment and event tables.
    pub modifiers: i32,
    pub assigned_chunk: Option<i32>,
}

impl AttributeState {
    pub const fn new(base: i32, modifiers: i32) -> Self {
        Self {
            base,
            modifiers,
            assigned_chunk: None,
        }
    }

    pub const fn with_chunk(mut self, chunk: i32) -> Self {
        self.assigned_chunk = Some(chunk);
        self
    }

    pub const fn is_assigned(&self) -> bool {
        self.assigned_chunk.is_some()
    }
}

/// One [`AttributeState`] per [`Attribute`], keyed by the Swedish names in
/// saved data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    #[cfg_attr(feature = "serde", serde(rename = "Förflyttning"))]
    pub forflyttning: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Intryck"))]
    pub intryck: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Kroppsbyggnad"))]
    pub kroppsbyggnad: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Livskraft"))]
    pub livskraft: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Reaktion"))]
    pub reaktion: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Självkontroll"))]
    pub sjalvkontroll: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Vaksamhet"))]
    pub vaksamhet: AttributeState,
    #[cfg_attr(feature = "serde", serde(rename = "Visdom"))]
    pub visdom: AttributeState,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> &AttributeState {
        match attribute {
            Attribute::Forflyttning => &self.forflyttning,
            Attribute::Intryck => &self.intryck,
            Attribute::Kroppsbyggnad => &self.kroppsbyggnad,
            Attribute::Livskraft => &self.livskraft,
            Attribute::Reaktion => &self.reaktion,
            Attribute::Sjalvkontroll => &self.sjalvkontroll,
            Attribute::Vaksamhet => &self.vaksamhet,
            Attribute::Visdom => &self.visdom,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut AttributeState {
        match attribute {
            Attribute::Forflyttning => &mut self.forflyttning,
            Attribute::Intryck => &mut self.intryck,
            Attribute::Kroppsbyggnad => &mut self.kroppsbyggnad,
            Attribute::Livskraft => &mut self.livskraft,
            Attribute::Reaktion => &mut self.reaktion,
            Attribute::Sjalvkontroll => &mut self.sjalvkontroll,
            Attribute::Vaksamhet => &mut self.vaksamhet,
            Attribute::Visdom => &mut self.visdom,
        }
    }

    /// Attributes in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeState)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }

    pub fn clear_chunks(&mut self) {
        for attribute in Attribute::ALL {
            self.get_mut(attribute).assigned_chunk = None;
        }
    }
}
