//! Lookup of materials by identifier.

use thiserror::Error;

use super::material::{Material, MaterialCategory, MaterialId, MaterialKind};

/// Read-only view of the materials that layer stacks reference.
///
/// A stack only stores [`MaterialId`]s. An id that no longer resolves is a
/// null layer.
pub trait MaterialCatalog {
    /// Returns the material with the given id, if it still exists.
    fn material(&self, id: MaterialId) -> Option<&Material>;

    /// Returns the category of the material with the given id.
    fn category(&self, id: MaterialId) -> Option<MaterialCategory> {
        self.material(id).map(Material::category)
    }
}

/// Errors raised when updating a [`Materials`] catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No material exists with this id.
    #[error("{0} not found")]
    NotFound(MaterialId),

    /// An update tried to change a material's category.
    #[error("{id} is {expected:?} and cannot become {found:?}")]
    CategoryChanged {
        id: MaterialId,
        expected: MaterialCategory,
        found: MaterialCategory,
    },
}

/// An owning arena of materials.
///
/// Ids are handed out in creation order and never reused, so removing a
/// material turns every reference to it into a null layer.
#[derive(Debug, Clone, Default)]
pub struct Materials {
    slots: Vec<Option<Material>>,
}

impl Materials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material and returns its id.
    pub fn insert(&mut self, name: impl Into<String>, kind: MaterialKind) -> MaterialId {
        let id = MaterialId::new(self.slots.len());
        self.slots.push(Some(Material::new(id, name.into(), kind)));
        id
    }

    /// Removes a material, returning it if it existed.
    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    /// Returns a mutable handle to a material's non-category data (its name).
    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Applies `update` to a material's attributes.
    ///
    /// The update may change any attribute within the material's category.
    /// If it replaces the kind with one of another category the material is
    /// restored to its previous state.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the id does not resolve, or
    /// [`CatalogError::CategoryChanged`] if the update changed the category.
    pub fn modify<F>(&mut self, id: MaterialId, update: F) -> Result<(), CatalogError>
    where
        F: FnOnce(&mut MaterialKind),
    {
        let material = self.material_mut(id).ok_or(CatalogError::NotFound(id))?;
        let previous = *material.kind();

        update(material.kind_mut());

        let found = material.category();
        if found != previous.category() {
            *material.kind_mut() = previous;
            return Err(CatalogError::CategoryChanged {
                id,
                expected: previous.category(),
                found,
            });
        }
        Ok(())
    }

    /// Iterates over the materials that still exist, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MaterialCatalog for Materials {
    fn material(&self, id: MaterialId) -> Option<&Material> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }
}
