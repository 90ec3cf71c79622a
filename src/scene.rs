//! Scene graph: an arena of nodes with parent-relative transforms.
//!
//! Nodes are created once during world construction and live for the whole
//! program; there is no removal. Each node caches its world matrix, and the
//! cache is refreshed explicitly — [`Scene::update_world_transforms`] for the
//! whole tree, [`Scene::update_subtree`] after mutating a single branch.

use glam::{Mat4, Vec3};

use crate::light::DirectionalLight;
use crate::primitives::Primitive;
use crate::transform::Transform;

/// Index of a node inside its [`Scene`] arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a node contributes to the rendered frame.
pub enum NodeKind {
    /// Pure grouping node, transform only.
    Group,
    /// A renderable mesh with its material.
    Primitive(Primitive),
    /// A directional light; the node position orients it toward the origin.
    Light(DirectionalLight),
}

pub struct Node {
    pub transform: Transform,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    world_matrix: Mat4,
}

impl Node {
    fn new(kind: NodeKind, transform: Transform) -> Self {
        Self {
            transform,
            kind,
            parent: None,
            children: Vec::new(),
            world_matrix: Mat4::IDENTITY,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// World matrix as of the last explicit recompute.
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }

    /// World-space position as of the last explicit recompute.
    pub fn world_position(&self) -> Vec3 {
        self.world_matrix.w_axis.truncate()
    }
}

/// The root scene container. Owns the full node tree and the clear color.
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    pub background: [f32; 3],
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            // sky blue
            background: [0.53, 0.81, 0.92],
        }
    }

    /// Add a node at the scene root with the given transform.
    pub fn add(&mut self, kind: NodeKind, transform: Transform) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind, transform);
        node.world_matrix = node.transform.local_matrix();
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Add a renderable primitive at the scene root.
    pub fn add_primitive(&mut self, primitive: Primitive) -> NodeId {
        self.add(NodeKind::Primitive(primitive), Transform::new())
    }

    /// Re-parent `child` under `parent`. The child keeps its local transform,
    /// which is interpreted relative to the parent's frame from now on.
    ///
    /// The child's cached world matrix is stale until the subtree is
    /// recomputed; callers mutating transforms afterwards should follow up
    /// with [`Scene::update_subtree`] on the parent.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        assert_ne!(child, parent, "a node cannot parent itself");
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.roots.retain(|&r| r != child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Shorthand for mutating a node's local transform.
    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Recompute every node's world matrix, root-down.
    pub fn update_world_transforms(&mut self) {
        let roots = self.roots.clone();
        for root in roots {
            self.update_subtree(root);
        }
    }

    /// Recompute world matrices for `root` and all of its descendants,
    /// composing against the parent's current world matrix.
    pub fn update_subtree(&mut self, root: NodeId) {
        let parent_world = match self.nodes[root.0].parent {
            Some(p) => self.nodes[p.0].world_matrix,
            None => Mat4::IDENTITY,
        };

        let mut stack = vec![(root, parent_world)];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            node.world_matrix = parent_world * node.transform.local_matrix();
            let world = node.world_matrix;
            for &child in &self.nodes[id.0].children {
                stack.push((child, world));
            }
        }
    }

    /// First directional light in the scene, with its node id.
    pub fn directional_light(&self) -> Option<(NodeId, &DirectionalLight)> {
        self.iter().find_map(|(id, node)| match node.kind() {
            NodeKind::Light(light) => Some((id, light)),
            _ => None,
        })
    }
}
