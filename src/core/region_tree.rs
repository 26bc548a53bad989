//! Hierarchische Registry benannter Regionen.
//!
//! Die Wurzel ist synthetisch und nicht Teil der Map: Regionen ohne Parent
//! stehen in `roots`. Namen sind baumweit eindeutig, der Baum bleibt zyklenfrei.

use super::error::LayerError;
use super::grid::GridRect;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ein Knoten des Regionsbaums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNode {
    pub name: String,
    pub rect: GridRect,
    /// `None` = direkt unter der Wurzel
    pub parent: Option<String>,
    /// Kind-Namen in Einfügereihenfolge
    pub children: Vec<String>,
}

/// Verschachtelte Form eines Teilbaums (`{ name, children, rect }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    pub name: String,
    pub rect: [[i32; 2]; 2],
    pub children: Vec<RegionSnapshot>,
}

#[derive(Debug, Clone, Default)]
pub struct RegionTree {
    nodes: IndexMap<String, RegionNode>,
    roots: Vec<String>,
}

impl RegionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn find(&self, name: &str) -> Option<&RegionNode> {
        self.nodes.get(name)
    }

    /// Namen der Knoten direkt unter der Wurzel.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Entfernt alle Knoten.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    /// Fügt einen Knoten unter `parent` ein (`None` = Wurzel).
    pub fn add(
        &mut self,
        name: &str,
        rect: GridRect,
        parent: Option<&str>,
    ) -> Result<(), LayerError> {
        if name.trim().is_empty() {
            return Err(LayerError::EmptyName);
        }
        if self.contains(name) {
            return Err(LayerError::name_taken(name));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(LayerError::not_found(parent));
            }
        }

        self.nodes.insert(
            name.to_string(),
            RegionNode {
                name: name.to_string(),
                rect,
                parent: parent.map(str::to_string),
                children: Vec::new(),
            },
        );
        self.attach(name, parent);
        Ok(())
    }

    /// Benennt einen Knoten um. Position im Baum und Kinder bleiben erhalten.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), LayerError> {
        if new.trim().is_empty() {
            return Err(LayerError::EmptyName);
        }
        if !self.contains(old) {
            return Err(LayerError::not_found(old));
        }
        if old == new {
            return Ok(());
        }
        if self.contains(new) {
            return Err(LayerError::name_taken(new));
        }

        let Some((index, _, mut node)) = self.nodes.shift_remove_full(old) else {
            return Err(LayerError::not_found(old));
        };
        node.name = new.to_string();
        for child in &node.children {
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = Some(new.to_string());
            }
        }
        let siblings = match node.parent.as_deref() {
            Some(parent) => self.nodes.get_mut(parent).map(|p| &mut p.children),
            None => Some(&mut self.roots),
        };
        if let Some(siblings) = siblings {
            for sibling in siblings.iter_mut().filter(|s| s.as_str() == old) {
                *sibling = new.to_string();
            }
        }
        self.nodes.shift_insert(index, new.to_string(), node);
        Ok(())
    }

    /// Entfernt einen einzelnen Knoten.
    ///
    /// Kinder werden nicht mitgelöscht, sondern unter die Wurzel gehängt.
    /// Gibt den entfernten Knoten (mit seiner ursprünglichen Kinderliste) zurück.
    pub fn delete(&mut self, name: &str) -> Result<RegionNode, LayerError> {
        let Some(node) = self.nodes.shift_remove(name) else {
            return Err(LayerError::not_found(name));
        };
        self.detach(name, node.parent.as_deref());
        for child in &node.children {
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parent = None;
            }
            self.roots.push(child.clone());
        }
        Ok(node)
    }

    /// Hängt `name` unter `new_parent` um.
    ///
    /// Liefert [`LayerError::Cycle`], wenn `new_parent` der Knoten selbst oder einer
    /// seiner Nachfahren ist; der Baum bleibt dann unverändert.
    pub fn move_to(&mut self, name: &str, new_parent: &str) -> Result<(), LayerError> {
        if !self.contains(name) {
            return Err(LayerError::not_found(name));
        }
        if !self.contains(new_parent) {
            return Err(LayerError::not_found(new_parent));
        }
        if name == new_parent || self.is_ancestor(name, new_parent) {
            return Err(LayerError::Cycle {
                name: name.to_string(),
                target: new_parent.to_string(),
            });
        }
        self.reparent(name, Some(new_parent));
        Ok(())
    }

    /// Hängt `name` direkt unter die Wurzel.
    pub fn move_to_root(&mut self, name: &str) -> Result<(), LayerError> {
        if !self.contains(name) {
            return Err(LayerError::not_found(name));
        }
        self.reparent(name, None);
        Ok(())
    }

    /// Ist `ancestor` ein echter Vorfahre von `node`?
    pub fn is_ancestor(&self, ancestor: &str, node: &str) -> bool {
        let mut current = self.find(node).and_then(|n| n.parent.as_deref());
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = self.find(name).and_then(|n| n.parent.as_deref());
        }
        false
    }

    /// Alle Nachfahren von `name` in Post-Order (tiefste zuerst).
    pub fn descendants(&self, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(name) {
            for child in &node.children {
                out.extend(self.descendants(child));
                out.push(child.clone());
            }
        }
        out
    }

    /// Verschachtelte Darstellung aller Wurzel-Teilbäume.
    pub fn to_nested(&self) -> Vec<RegionSnapshot> {
        self.roots.iter().filter_map(|r| self.snapshot(r)).collect()
    }

    fn snapshot(&self, name: &str) -> Option<RegionSnapshot> {
        let node = self.find(name)?;
        Some(RegionSnapshot {
            name: node.name.clone(),
            rect: node.rect.corners(),
            children: node
                .children
                .iter()
                .filter_map(|c| self.snapshot(c))
                .collect(),
        })
    }

    fn reparent(&mut self, name: &str, new_parent: Option<&str>) {
        let old_parent = self.find(name).and_then(|n| n.parent.clone());
        self.detach(name, old_parent.as_deref());
        if let Some(node) = self.nodes.get_mut(name) {
            node.parent = new_parent.map(str::to_string);
        }
        self.attach(name, new_parent);
    }

    fn attach(&mut self, name: &str, parent: Option<&str>) {
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(name.to_string()),
            None => self.roots.push(name.to_string()),
        }
    }

    fn detach(&mut self, name: &str, parent: Option<&str>) {
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.retain(|c| c != name),
            None => self.roots.retain(|c| c != name),
        }
    }
}

#[cfg(test)]
mod tests;
