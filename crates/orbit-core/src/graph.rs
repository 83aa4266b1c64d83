//! Retained scene graph.
//!
//! Nodes live in a generational arena owned by [`SceneGraph`]. A [`NodeId`]
//! only names a node: it does not keep it alive, and once the graph is
//! cleared every previously issued id resolves to `None`.

use crate::material::Renderable;
use crate::tags::Tags;
use crate::transform::{facing_rotation, Transform};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub name: Option<&'static str>,
    pub transform: Transform,
    pub renderable: Option<Renderable>,
    pub tags: Tags,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    names: FnvHashMap<&'static str, NodeId>,
    root: NodeId,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        let root = NodeId {
            index: 0,
            generation: 0,
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node::default().named("root")),
            }],
            names: FnvHashMap::default(),
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Insert `node` as the last child of `parent`.
    ///
    /// A stale parent id attaches the node to the root instead.
    pub fn add(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let parent = if self.contains(parent) {
            parent
        } else {
            self.root
        };
        node.parent = Some(parent);
        node.children.clear();
        let id = NodeId {
            index: self.slots.len() as u32,
            generation: self.root.generation,
        };
        if let Some(name) = node.name {
            self.names.insert(name, id);
        }
        self.slots.push(Slot {
            generation: id.generation,
            node: Some(node),
        });
        if let Some(p) = self.get_mut_raw(parent) {
            p.children.push(id);
        }
        id
    }

    /// Tear down every node and start over with a fresh root.
    ///
    /// All ids handed out before the call become stale.
    pub fn clear(&mut self) {
        let generation = self.root.generation.wrapping_add(1);
        self.slots.clear();
        self.names.clear();
        self.root = NodeId {
            index: 0,
            generation,
        };
        self.slots.push(Slot {
            generation,
            node: Some(Node::default().named("root")),
        });
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.get_mut_raw(id)
    }

    fn get_mut_raw(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied().filter(|id| self.contains(*id))
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.get_mut(id).map(|n| &mut n.transform)
    }

    /// Walk from `id` up to the root, `id` included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// Nearest node on the ancestor chain (inclusive) whose node satisfies `pred`.
    pub fn find_ancestor(&self, id: NodeId, pred: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.ancestors(id)
            .find(|a| self.get(*a).map(&pred).unwrap_or(false))
    }

    /// Depth-first list of `id` and everything below it.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let Some(node) = self.get(n) else { continue };
            out.push(n);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        self.ancestors(id)
            .filter_map(|a| self.get(a))
            .fold(Mat4::IDENTITY, |acc, n| n.transform.matrix() * acc)
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).w_axis.truncate()
    }

    /// Visit every live node with its world matrix, parents before children.
    pub fn visit_world(&self, mut f: impl FnMut(NodeId, &Node, &Mat4)) {
        let mut stack = vec![(self.root, Mat4::IDENTITY)];
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            let world = parent_world * node.transform.matrix();
            f(id, node, &world);
            for c in node.children.iter().rev() {
                stack.push((*c, world));
            }
        }
    }

    /// Rotate `id` so its local +Z axis faces `target` in world space,
    /// compensating for whatever rotation its ancestors carry.
    pub fn look_at_world(&mut self, id: NodeId, target: Vec3) {
        let Some(node) = self.get(id) else { return };
        let parent_world = node
            .parent
            .map(|p| self.world_matrix(p))
            .unwrap_or(Mat4::IDENTITY);
        let (_, parent_rot, _) = parent_world.to_scale_rotation_translation();
        let eye = parent_world.transform_point3(node.transform.position);
        let world_rot = facing_rotation(eye, target, Vec3::Y);
        let local = parent_rot.inverse() * world_rot;
        if let Some(t) = self.transform_mut(id) {
            t.set_quat(local);
        }
    }
}

pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.graph.get(cur).and_then(|n| n.parent);
        Some(cur)
    }
}
