//! Per-unit compose results
//!
//! A [`ComposeResult`] collects everything found while composing one unit:
//! the accepted components, the hints raised for them (or for the unit in
//! general) and the global ID of every component.
//!
//! Components live in an arena and are addressed by [`ComponentHandle`].
//! Handles are never reused, so a handle to a component that was dropped from
//! the result stays dead. Content checksums are keyed by handle because a
//! component's id may change while it is being processed; GCIDs are keyed by
//! component id. An id changed through [`ComposeResult::component_mut`] is
//! picked up by id lookups right away and re-keyed on the next mutation.
//!
//! Recording an error hint against a component removes it from the result
//! immediately. This is the only way an accepted component disappears, apart
//! from the explicit `remove_*` calls.

pub mod gcid;

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

use indexmap::IndexMap;

pub use gcid::build_component_global_id;

use crate::domain::{BundleKind, BundleRef, Component, ComponentKind, MergeKind};
use crate::error::{ComposeError, Result};
use crate::hash::{chain_checksum, checksum_bytes};
use crate::hint::{Hint, HintTagRegistry};

/// Id under which hints that concern no particular component are stored
pub const GENERAL_HINTS_ID: &str = "general";

/// Stable reference to a component stored in a [`ComposeResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentHandle(usize);

#[derive(Debug)]
struct Slot {
    /// Id the component is registered under, its last known id once dropped
    id: String,
    component: Option<Component>,
}

/// Components, hints and global IDs for one unit
#[derive(Debug)]
pub struct ComposeResult {
    registry: Arc<HintTagRegistry>,
    bundle_kind: BundleKind,
    bundle_id: String,
    origin: Option<String>,

    slots: Vec<Slot>,
    /// Handles lent out mutably since ids were last synced
    lent: Vec<ComponentHandle>,
    ids: IndexMap<String, ComponentHandle>,
    checksums: HashMap<ComponentHandle, String>,
    gcids: IndexMap<String, String>,
    hints: IndexMap<String, Vec<Hint>>,
}

impl ComposeResult {
    pub fn new(registry: Arc<HintTagRegistry>) -> Self {
        Self {
            registry,
            bundle_kind: BundleKind::Unknown,
            bundle_id: String::new(),
            origin: None,
            slots: Vec::new(),
            lent: Vec::new(),
            ids: IndexMap::new(),
            checksums: HashMap::new(),
            gcids: IndexMap::new(),
            hints: IndexMap::new(),
        }
    }

    /// Create a result for the bundle identified by `kind` and `id`
    pub fn for_bundle(registry: Arc<HintTagRegistry>, kind: BundleKind, id: &str) -> Self {
        let mut result = Self::new(registry);
        result.bundle_kind = kind;
        result.bundle_id = id.to_string();
        result
    }

    pub fn registry(&self) -> &HintTagRegistry {
        &self.registry
    }

    pub fn bundle_kind(&self) -> BundleKind {
        self.bundle_kind
    }

    pub fn set_bundle_kind(&mut self, kind: BundleKind) {
        self.bundle_kind = kind;
    }

    pub fn bundle_id(&self) -> &str {
        &self.bundle_id
    }

    pub fn set_bundle_id(&mut self, id: &str) {
        self.bundle_id = id.to_string();
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Catalog origin stamped on components added from now on
    pub fn set_origin(&mut self, origin: Option<&str>) {
        self.origin = origin.map(str::to_string);
    }

    /// True if nothing at all was found for this unit
    pub fn is_ignored(&self) -> bool {
        self.ids.is_empty() && self.hints.is_empty()
    }

    pub fn components_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of hints recorded across all ids
    pub fn hints_count(&self) -> usize {
        self.hints.values().map(Vec::len).sum()
    }

    /// Add a component, attaching bundle information first.
    ///
    /// A component already stored under the same id is replaced; its handle
    /// becomes dead. The GCID is seeded from `data`.
    pub fn add_component(
        &mut self,
        mut component: Component,
        data: Option<&[u8]>,
    ) -> Result<ComponentHandle> {
        if !component.has_id() {
            return Err(ComposeError::ComponentWithoutId);
        }
        self.sync_ids();

        let keeps_own_packaging = matches!(
            component.kind,
            ComponentKind::WebApp | ComponentKind::OperatingSystem
        ) || component.merge_kind == MergeKind::RemoveComponent;

        if !keeps_own_packaging && self.bundle_kind == BundleKind::Package {
            component.pkgnames = vec![self.bundle_id.clone()];
        } else if self.bundle_kind.is_non_package_bundle() {
            component.add_bundle(BundleRef {
                kind: self.bundle_kind,
                id: self.bundle_id.clone(),
            });
        }
        if component.origin.is_none() {
            component.origin.clone_from(&self.origin);
        }

        if let Some(previous) = self.ids.get(&component.id).copied() {
            self.drop_slot(previous);
        }

        let handle = ComponentHandle(self.slots.len());
        let id = component.id.clone();
        self.slots.push(Slot {
            id: id.clone(),
            component: Some(component),
        });
        self.ids.insert(id, handle);

        self.update_gcid(handle, data);
        Ok(handle)
    }

    pub fn add_component_with_string(
        &mut self,
        component: Component,
        data: Option<&str>,
    ) -> Result<ComponentHandle> {
        self.add_component(component, data.map(str::as_bytes))
    }

    pub fn component(&self, handle: ComponentHandle) -> Option<&Component> {
        self.slots.get(handle.0).and_then(|s| s.component.as_ref())
    }

    /// Mutable access to a live component. Its id may be changed freely.
    pub fn component_mut(&mut self, handle: ComponentHandle) -> Option<&mut Component> {
        let component = self.slots.get_mut(handle.0)?.component.as_mut()?;
        if !self.lent.contains(&handle) {
            self.lent.push(handle);
        }
        Some(component)
    }

    /// Change the id of a live component, keeping its checksum.
    ///
    /// A component already stored under `cid` is replaced.
    pub fn set_component_id(&mut self, handle: ComponentHandle, cid: &str) -> bool {
        let Some(component) = self.component_mut(handle) else {
            return false;
        };
        component.id = cid.to_string();
        self.sync_ids();
        true
    }

    pub fn handle_for_id(&self, cid: &str) -> Option<ComponentHandle> {
        let current = |h: &ComponentHandle| self.component(*h).is_some_and(|c| c.id == cid);
        self.lent
            .iter()
            .rev()
            .find(|h| current(*h))
            .or_else(|| self.ids.get(cid).filter(|h| current(*h)))
            .copied()
    }

    pub fn component_by_id(&self, cid: &str) -> Option<&Component> {
        self.handle_for_id(cid).and_then(|h| self.component(h))
    }

    /// Live components in insertion order
    pub fn fetch_components(&self) -> Vec<&Component> {
        self.ids
            .values()
            .filter_map(|h| self.component(*h))
            .collect()
    }

    /// True if the handle no longer refers to a component in this result
    pub fn is_component_ignored(&self, handle: ComponentHandle) -> bool {
        self.component(handle).is_none()
    }

    /// Chain `data` into the component's content checksum and refresh its GCID.
    ///
    /// Returns `false` if the component is not part of this result. The
    /// checksum depends on the order of calls, so callers feed metainfo data
    /// first, then desktop-entry data, then release data.
    pub fn update_gcid(&mut self, handle: ComponentHandle, data: Option<&[u8]>) -> bool {
        self.sync_ids();
        let Some(cid) = self.live_id(handle).map(str::to_string) else {
            return false;
        };
        let data = data.unwrap_or_default();

        let checksum = match self.checksums.get(&handle) {
            Some(previous) => chain_checksum(previous, data),
            None => checksum_bytes(data),
        };

        if let Some(gcid) = build_component_global_id(&cid, Some(&checksum)) {
            self.gcids.insert(cid, gcid);
        }
        self.checksums.insert(handle, checksum);
        true
    }

    pub fn update_gcid_with_string(&mut self, handle: ComponentHandle, data: Option<&str>) -> bool {
        self.update_gcid(handle, data.map(str::as_bytes))
    }

    pub fn gcid_for_cid(&self, cid: &str) -> Option<&str> {
        self.gcids.get(cid).map(String::as_str)
    }

    pub fn gcid_for_component(&self, handle: ComponentHandle) -> Option<&str> {
        self.component(handle)
            .and_then(|c| self.gcid_for_cid(&c.id))
    }

    /// All known global IDs
    pub fn fetch_gcids(&self) -> Vec<&str> {
        self.gcids.values().map(String::as_str).collect()
    }

    /// Record a hint against a component, or against the unit if `handle` is `None`.
    ///
    /// Returns `false` if the hint was an error and the component was removed
    /// as a consequence.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not registered. Hint tags are a closed set known
    /// when the registry is built, so an unknown tag is a programming error.
    pub fn add_hint(
        &mut self,
        handle: Option<ComponentHandle>,
        tag: &str,
        vars: &[(&str, &str)],
    ) -> bool {
        self.sync_ids();
        let cid = match handle {
            Some(h) => self.handle_id(h).unwrap_or(GENERAL_HINTS_ID).to_string(),
            None => GENERAL_HINTS_ID.to_string(),
        };
        let is_error = self.push_hint(&cid, tag, vars);

        match handle {
            Some(h) if is_error => self.remove_component_full(h, false).is_none(),
            _ => true,
        }
    }

    pub fn add_hint_simple(&mut self, handle: Option<ComponentHandle>, tag: &str) -> bool {
        self.add_hint(handle, tag, &[])
    }

    /// Record a hint for a component id that may not be part of the result.
    ///
    /// An error hint removes the component stored under `cid`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not registered.
    pub fn add_hint_by_cid(&mut self, cid: &str, tag: &str, vars: &[(&str, &str)]) -> bool {
        self.sync_ids();
        let is_error = self.push_hint(cid, tag, vars);
        if !is_error {
            return true;
        }
        match self.handle_for_id(cid) {
            Some(h) => self.remove_component_full(h, false).is_none(),
            None => true,
        }
    }

    /// Hints recorded for `cid`, in detection order
    pub fn hints(&self, cid: &str) -> &[Hint] {
        self.hints.get(cid).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the component has a hint with the given tag
    pub fn has_hint(&self, handle: ComponentHandle, tag: &str) -> bool {
        self.handle_id(handle)
            .is_some_and(|cid| self.hints(cid).iter().any(|h| h.tag() == tag))
    }

    pub fn component_ids_with_hints(&self) -> Vec<&str> {
        self.hints.keys().map(String::as_str).collect()
    }

    /// Every recorded hint, grouped by id
    pub fn fetch_hints_all(&self) -> Vec<&Hint> {
        self.hints.values().flatten().collect()
    }

    pub fn remove_hints_for_id(&mut self, cid: &str) {
        self.hints.shift_remove(cid);
    }

    /// Remove a component together with its GCID
    pub fn remove_component(&mut self, handle: ComponentHandle) -> Option<Component> {
        self.remove_component_full(handle, true)
    }

    /// Remove a component, dropping its GCID only if `remove_gcid` is set
    pub fn remove_component_full(
        &mut self,
        handle: ComponentHandle,
        remove_gcid: bool,
    ) -> Option<Component> {
        self.sync_ids();
        let cid = self.live_id(handle)?.to_string();
        self.ids.shift_remove(&cid);
        if remove_gcid {
            self.gcids.shift_remove(&cid);
        }
        self.drop_slot(handle)
    }

    pub fn remove_component_by_id(&mut self, cid: &str) -> Option<Component> {
        let handle = self.handle_for_id(cid)?;
        self.remove_component(handle)
    }

    /// Id a live component is registered under
    fn live_id(&self, handle: ComponentHandle) -> Option<&str> {
        let slot = self.slots.get(handle.0)?;
        slot.component.as_ref().map(|_| slot.id.as_str())
    }

    /// Re-key every lent component whose id changed
    fn sync_ids(&mut self) {
        for handle in mem::take(&mut self.lent) {
            self.sync_id(handle);
        }
    }

    fn sync_id(&mut self, handle: ComponentHandle) {
        let Some(slot) = self.slots.get_mut(handle.0) else {
            return;
        };
        let Some(component) = slot.component.as_ref() else {
            return;
        };
        if component.id == slot.id {
            return;
        }
        let new_id = component.id.clone();
        let old_id = mem::replace(&mut slot.id, new_id.clone());

        let mut index = self.ids.get_index_of(&old_id).unwrap_or(self.ids.len());
        self.ids.shift_remove(&old_id);
        if let Some((other_index, _, other)) = self.ids.shift_remove_full(&new_id) {
            if other_index < index {
                index -= 1;
            }
            self.drop_slot(other);
        }
        self.ids
            .shift_insert(index.min(self.ids.len()), new_id.clone(), handle);

        self.gcids.shift_remove(&old_id);
        let gcid = self
            .checksums
            .get(&handle)
            .and_then(|checksum| build_component_global_id(&new_id, Some(checksum)));
        if let Some(gcid) = gcid {
            self.gcids.insert(new_id, gcid);
        }
    }

    /// Id of a component, falling back to its last known id once removed
    fn handle_id(&self, handle: ComponentHandle) -> Option<&str> {
        let slot = self.slots.get(handle.0)?;
        Some(slot.component.as_ref().map_or(slot.id.as_str(), |c| c.id.as_str()))
    }

    fn drop_slot(&mut self, handle: ComponentHandle) -> Option<Component> {
        self.checksums.remove(&handle);
        let slot = self.slots.get_mut(handle.0)?;
        let component = slot.component.take()?;
        slot.id.clone_from(&component.id);
        Some(component)
    }

    /// Append a hint and report whether it was an error
    #[allow(clippy::panic)]
    fn push_hint(&mut self, cid: &str, tag: &str, vars: &[(&str, &str)]) -> bool {
        let mut hint = match Hint::new_for_tag(&self.registry, tag) {
            Ok(hint) => hint,
            Err(e) => panic!("{e}"),
        };
        for (name, value) in vars {
            hint.add_explanation_var(name, value);
        }

        let is_error = hint.is_error();
        self.hints.entry(cid.to_string()).or_default().push(hint);
        is_error
    }
}
