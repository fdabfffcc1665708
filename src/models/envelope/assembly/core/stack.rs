//! Ordered layer stacks and their validated mutations.
//!
//! A [`LayerStack`] stores material ids in physical order, exterior first.
//! Every mutation builds the full proposed sequence, resolves it through a
//! [`MaterialCatalog`], runs [`validate_layers`] and only then commits.
//!
//! # Null layers
//!
//! An id whose material was removed from the catalog is a null layer. Index
//! based operations compact null layers out first and shift the caller's
//! index down by one for every null layer strictly before it, so an index
//! always refers to the stack's visible ordering.

mod error;

pub use error::LayerError;

use std::fmt;

use super::{
    catalog::MaterialCatalog,
    material::{Family, Material, MaterialCategory, MaterialId},
    validate::validate_layers,
};

/// Stable identifier of a [`LayerStack`] within its owning registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssemblyId(usize);

impl AssemblyId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AssemblyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assembly #{}", self.0)
    }
}

/// The subtype of an assembly, which sets its minimum layer count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AssemblyKind {
    /// A plain construction; any legal layer count, including zero.
    #[default]
    Standard,
    /// A construction with an embedded heat source or sink (radiant slab),
    /// which sits between two layers.
    InternalSource,
}

impl AssemblyKind {
    #[must_use]
    pub fn min_layers(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::InternalSource => 2,
        }
    }
}

/// An ordered stack of material layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    id: AssemblyId,
    name: String,
    kind: AssemblyKind,
    layers: Vec<MaterialId>,
    validated: bool,
}

/// The visible layers of a stack, resolved to materials and validated.
#[derive(Debug, Clone)]
pub struct ResolvedLayers<'a> {
    family: Family,
    materials: Vec<&'a Material>,
}

impl<'a> ResolvedLayers<'a> {
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    #[must_use]
    pub fn materials(&self) -> &[&'a Material] {
        &self.materials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Returns the only layer, if there is exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&'a Material> {
        match self.materials.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new(id: AssemblyId, name: impl Into<String>, kind: AssemblyKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            layers: Vec::new(),
            validated: true,
        }
    }

    /// Creates a stack from a non-empty list of layers.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::BelowMinimumLayerCount`] for an empty list, or
    /// any error [`LayerStack::set_layers`] would return.
    pub fn with_layers(
        id: AssemblyId,
        name: impl Into<String>,
        kind: AssemblyKind,
        layers: &[MaterialId],
        catalog: &impl MaterialCatalog,
    ) -> Result<Self, LayerError> {
        if layers.is_empty() {
            return Err(LayerError::BelowMinimumLayerCount {
                min: kind.min_layers().max(1),
                proposed: 0,
            });
        }

        let mut stack = Self::new(id, name, kind);
        stack.set_layers(layers, catalog)?;
        Ok(stack)
    }

    /// Recreates a previously persisted stack without validating it.
    ///
    /// The layers are checked lazily by [`LayerStack::validate`] and
    /// [`LayerStack::resolve`]; any later mutation validates as usual.
    #[must_use]
    pub fn rehydrate(
        id: AssemblyId,
        name: impl Into<String>,
        kind: AssemblyKind,
        layers: Vec<MaterialId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            layers,
            validated: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> AssemblyId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn kind(&self) -> AssemblyKind {
        self.kind
    }

    /// Returns the stored layer ids, null layers included.
    #[must_use]
    pub fn layers(&self) -> &[MaterialId] {
        &self.layers
    }

    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Replaces every layer at once.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::BelowMinimumLayerCount`] if the list is shorter
    /// than the assembly kind allows, [`LayerError::MaterialNotFound`] if an
    /// id does not resolve, or the rule the new layers break.
    pub fn set_layers(
        &mut self,
        layers: &[MaterialId],
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        self.check_minimum(layers.len())?;
        self.commit(layers.to_vec(), 0, catalog)
    }

    /// Inserts a layer at `index`, shifting later layers back.
    ///
    /// The index is clamped to the number of visible layers.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::MaterialNotFound`] or the rule the insertion breaks.
    pub fn insert_layer(
        &mut self,
        index: usize,
        material: MaterialId,
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        let (mut proposed, position, dropped) = self.compacted(index, catalog);
        proposed.insert(position.min(proposed.len()), material);
        self.commit(proposed, dropped, catalog)
    }

    /// Replaces the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::IndexOutOfRange`] if `index` does not address a
    /// visible layer, [`LayerError::MaterialNotFound`], or the rule the
    /// replacement breaks.
    pub fn set_layer(
        &mut self,
        index: usize,
        material: MaterialId,
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        let (mut proposed, position, dropped) = self.compacted(index, catalog);
        let len = proposed.len();
        let slot = proposed
            .get_mut(position)
            .ok_or(LayerError::IndexOutOfRange { index, len })?;
        *slot = material;
        self.commit(proposed, dropped, catalog)
    }

    /// Replaces every layer with a single partition layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::MaterialNotFound`], or
    /// [`LayerError::FamilyMismatch`] if the material is not a partition.
    pub fn set_partition_layer(
        &mut self,
        material: MaterialId,
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        let category = catalog
            .category(material)
            .ok_or(LayerError::MaterialNotFound(material))?;
        if category != MaterialCategory::ModelPartition {
            return Err(LayerError::FamilyMismatch {
                expected: Family::Partition,
                found: category.family(),
            });
        }

        self.check_minimum(1)?;
        self.commit(vec![material], 0, catalog)
    }

    /// Removes the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::IndexOutOfRange`] if `index` does not address a
    /// visible layer, [`LayerError::BelowMinimumLayerCount`] if the assembly
    /// kind needs more layers, or the rule the remaining layers break.
    pub fn erase_layer(
        &mut self,
        index: usize,
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        let (mut proposed, position, dropped) = self.compacted(index, catalog);
        if position >= proposed.len() {
            return Err(LayerError::IndexOutOfRange {
                index,
                len: proposed.len(),
            });
        }
        self.check_minimum(proposed.len() - 1)?;

        proposed.remove(position);
        self.commit(proposed, dropped, catalog)
    }

    /// Classifies the visible layers.
    #[must_use]
    pub fn family(&self, catalog: &impl MaterialCatalog) -> Family {
        let categories: Vec<_> = self
            .layers
            .iter()
            .filter_map(|&id| catalog.category(id))
            .collect();

        match validate_layers(&categories) {
            Ok(family) => family,
            Err(err) => {
                debug_assert!(
                    !self.validated || categories.len() < self.layers.len(),
                    "{} was committed with illegal layers: {err}",
                    self.id
                );
                categories[0].family()
            }
        }
    }

    /// Returns `true` if the layer sequence reads the same in both directions.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.layers.iter().eq(self.layers.iter().rev())
    }

    /// Returns `true` if both stacks have the same layer sequence.
    #[must_use]
    pub fn equal_layers(&self, other: &LayerStack) -> bool {
        self.layers == other.layers
    }

    /// Returns `true` if this stack's layers are `other`'s layers reversed.
    #[must_use]
    pub fn reverse_equal_layers(&self, other: &LayerStack) -> bool {
        self.layers.iter().eq(other.layers.iter().rev())
    }

    /// Returns every position at which `material` appears.
    #[must_use]
    pub fn layer_indices_of(&self, material: MaterialId) -> Vec<usize> {
        self.layers
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| (id == material).then_some(index))
            .collect()
    }

    #[must_use]
    pub fn null_layer_count(&self, catalog: &impl MaterialCatalog) -> usize {
        self.layers
            .iter()
            .filter(|&&id| catalog.material(id).is_none())
            .count()
    }

    /// Returns `true` if the outermost visible layer is roof vegetation.
    #[must_use]
    pub fn is_green_roof(&self, catalog: &impl MaterialCatalog) -> bool {
        self.layers
            .iter()
            .find_map(|&id| catalog.category(id))
            .is_some_and(|c| c == MaterialCategory::RoofVegetation)
    }

    /// Resolves the visible layers and checks them against the layer rules.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Rule`] if the visible layers are not a legal
    /// assembly, which can happen for rehydrated stacks or after materials
    /// were removed from the catalog.
    pub fn resolve<'a>(
        &self,
        catalog: &'a impl MaterialCatalog,
    ) -> Result<ResolvedLayers<'a>, LayerError> {
        let materials: Vec<&'a Material> = self
            .layers
            .iter()
            .filter_map(|&id| catalog.material(id))
            .collect();
        let categories: Vec<_> = materials.iter().map(|m| m.category()).collect();
        let family = validate_layers(&categories)?;

        Ok(ResolvedLayers { family, materials })
    }

    /// Checks the visible layers against the layer rules.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Rule`] if the visible layers are not legal.
    pub fn validate(&self, catalog: &impl MaterialCatalog) -> Result<Family, LayerError> {
        self.resolve(catalog).map(|resolved| resolved.family())
    }

    fn check_minimum(&self, proposed: usize) -> Result<(), LayerError> {
        let min = self.kind.min_layers();
        if proposed < min {
            return Err(LayerError::BelowMinimumLayerCount { min, proposed });
        }
        Ok(())
    }

    /// Drops null layers and maps `index` onto the compacted sequence.
    ///
    /// Returns the visible layers, the mapped index and the number dropped.
    fn compacted(
        &self,
        index: usize,
        catalog: &impl MaterialCatalog,
    ) -> (Vec<MaterialId>, usize, usize) {
        let mut kept = Vec::with_capacity(self.layers.len());
        let mut removed_before = 0;

        for (position, &id) in self.layers.iter().enumerate() {
            if catalog.material(id).is_some() {
                kept.push(id);
            } else if position < index {
                removed_before += 1;
            }
        }

        let dropped = self.layers.len() - kept.len();
        (kept, index - removed_before, dropped)
    }

    /// Validates `proposed` and, if legal, replaces the layers with it.
    ///
    /// `dropped` counts the null layers left out of `proposed`.
    fn commit(
        &mut self,
        proposed: Vec<MaterialId>,
        dropped: usize,
        catalog: &impl MaterialCatalog,
    ) -> Result<(), LayerError> {
        let checked = proposed
            .iter()
            .map(|&id| catalog.category(id).ok_or(LayerError::MaterialNotFound(id)))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|categories| validate_layers(&categories).map_err(LayerError::from));

        match checked {
            Ok(family) => {
                if dropped > 0 {
                    tracing::warn!(assembly = %self.id, dropped, "discarded null layers");
                }
                let layers = proposed.len();
                tracing::debug!(assembly = %self.id, %family, layers, "committed layers");
                self.layers = proposed;
                self.validated = true;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(assembly = %self.id, error = %err, "rejected layer change");
                Err(err)
            }
        }
    }
}
