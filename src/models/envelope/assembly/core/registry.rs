//! Ownership of layer stacks and reverse-assembly lookup.

use std::collections::HashMap;

use thiserror::Error;

use super::{
    catalog::MaterialCatalog,
    material::MaterialId,
    stack::{AssemblyId, AssemblyKind, LayerError, LayerStack},
};

/// Errors raised by registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No assembly exists with this id.
    #[error("{0} not found")]
    AssemblyNotFound(AssemblyId),

    /// The assembly's layers could not be committed.
    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// A store of assemblies enumerated in creation order.
pub trait AssemblyRegistry {
    /// Iterates over every assembly in creation order.
    fn assemblies(&self) -> impl Iterator<Item = &LayerStack>;

    fn assembly(&self, id: AssemblyId) -> Option<&LayerStack>;

    /// Creates and registers a new assembly with validated layers.
    ///
    /// # Errors
    ///
    /// Returns the [`LayerError`] raised while committing the layers.
    fn create_assembly(
        &mut self,
        name: String,
        kind: AssemblyKind,
        layers: &[MaterialId],
        catalog: &impl MaterialCatalog,
    ) -> Result<AssemblyId, LayerError>;
}

/// An owning, creation-ordered arena of assemblies.
#[derive(Debug, Clone, Default)]
pub struct Assemblies {
    stacks: Vec<LayerStack>,
}

impl Assemblies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mutable handle for running layer mutations on an assembly.
    pub fn assembly_mut(&mut self, id: AssemblyId) -> Option<&mut LayerStack> {
        self.stacks.get_mut(id.index())
    }

    /// Registers a previously persisted assembly without validating it.
    pub fn rehydrate(
        &mut self,
        name: impl Into<String>,
        kind: AssemblyKind,
        layers: Vec<MaterialId>,
    ) -> AssemblyId {
        let id = AssemblyId::new(self.stacks.len());
        self.stacks
            .push(LayerStack::rehydrate(id, name, kind, layers));
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl AssemblyRegistry for Assemblies {
    fn assemblies(&self) -> impl Iterator<Item = &LayerStack> {
        self.stacks.iter()
    }

    fn assembly(&self, id: AssemblyId) -> Option<&LayerStack> {
        self.stacks.get(id.index())
    }

    fn create_assembly(
        &mut self,
        name: String,
        kind: AssemblyKind,
        layers: &[MaterialId],
        catalog: &impl MaterialCatalog,
    ) -> Result<AssemblyId, LayerError> {
        let id = AssemblyId::new(self.stacks.len());
        let mut stack = LayerStack::new(id, name, kind);
        stack.set_layers(layers, catalog)?;

        self.stacks.push(stack);
        Ok(id)
    }
}

/// Returns the assembly with `source`'s layers in the opposite order.
///
/// A symmetric source is its own reverse. Otherwise the first assembly, in
/// creation order, of the same kind whose layers equal the reversed sequence
/// exactly is reused. Failing that, `"<name> Reversed"` is created.
///
/// # Errors
///
/// Returns [`RegistryError::AssemblyNotFound`] if `source` does not exist, or
/// [`RegistryError::Layer`] if the reversed layers are not a legal assembly
/// (a green roof, for example).
pub fn find_or_create_reverse<R: AssemblyRegistry>(
    registry: &mut R,
    source: AssemblyId,
    catalog: &impl MaterialCatalog,
) -> Result<AssemblyId, RegistryError> {
    let stack = registry
        .assembly(source)
        .ok_or(RegistryError::AssemblyNotFound(source))?;

    if stack.is_symmetric() {
        return Ok(source);
    }

    let kind = stack.kind();
    let name = format!("{} Reversed", stack.name());
    let reversed: Vec<MaterialId> = stack.layers().iter().rev().copied().collect();

    let existing = registry
        .assemblies()
        .find(|candidate| candidate.kind() == kind && candidate.layers() == reversed.as_slice())
        .map(LayerStack::id);

    if let Some(id) = existing {
        tracing::debug!(%source, reverse = %id, "reusing reversed assembly");
        return Ok(id);
    }

    let id = registry.create_assembly(name, kind, &reversed, catalog)?;
    tracing::debug!(%source, reverse = %id, "created reversed assembly");
    Ok(id)
}

/// Remembers the reverse of each source assembly.
///
/// Repeated requests for the same source skip the registry scan as long as
/// the cached assembly still holds the source's layers reversed. Once either
/// side has been edited, the reverse is looked up again and the entry replaced.
#[derive(Debug, Clone, Default)]
pub struct ReversedAssemblies {
    reverses: HashMap<AssemblyId, AssemblyId>,
}

impl ReversedAssemblies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reverse of `source`, finding or creating it on first use.
    ///
    /// # Errors
    ///
    /// See [`find_or_create_reverse`].
    pub fn get_or_create<R: AssemblyRegistry>(
        &mut self,
        registry: &mut R,
        source: AssemblyId,
        catalog: &impl MaterialCatalog,
    ) -> Result<AssemblyId, RegistryError> {
        if let Some(&id) = self.reverses.get(&source) {
            let still_reversed = registry
                .assembly(source)
                .zip(registry.assembly(id))
                .is_some_and(|(stack, candidate)| {
                    candidate.kind() == stack.kind() && candidate.reverse_equal_layers(stack)
                });
            if still_reversed {
                return Ok(id);
            }
            tracing::debug!(%source, stale = %id, "cached reverse no longer matches");
        }

        let id = find_or_create_reverse(registry, source, catalog)?;
        self.reverses.insert(source, id);
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, source: AssemblyId) -> Option<AssemblyId> {
        self.reverses.get(&source).copied()
    }
}
