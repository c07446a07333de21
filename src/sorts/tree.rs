// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use super::SortResult;

/// Index of a node in the arena.
type NodeId = usize;

#[derive(Debug)]
struct Node {
  value: f64,
  left: Option<NodeId>,
  right: Option<NodeId>,
}

/// Unbalanced binary search tree stored as an arena of indexed nodes.
#[derive(Debug)]
struct SearchTree {
  nodes: Vec<Node>,
  root: Option<NodeId>,
}

impl SearchTree {
  fn with_capacity(capacity: usize) -> Self {
    Self {
      nodes: Vec::with_capacity(capacity),
      root: None,
    }
  }

  /// Inserts `value`; equal keys descend to the right.
  fn insert(&mut self, value: f64) {
    let id = self.nodes.len();
    self.nodes.push(Node {
      value,
      left: None,
      right: None,
    });

    let Some(mut current) = self.root else {
      self.root = Some(id);
      return;
    };

    loop {
      let node = &mut self.nodes[current];
      let link = if value < node.value {
        &mut node.left
      } else {
        &mut node.right
      };
      match *link {
        Some(child) => current = child,
        None => {
          *link = Some(id);
          return;
        }
      }
    }
  }

  /// In-order traversal with an explicit stack.
  fn into_sorted(self) -> Vec<f64> {
    let mut sorted = Vec::with_capacity(self.nodes.len());
    let mut stack = Vec::new();
    let mut cursor = self.root;

    while cursor.is_some() || !stack.is_empty() {
      while let Some(id) = cursor {
        stack.push(id);
        cursor = self.nodes[id].left;
      }
      if let Some(id) = stack.pop() {
        sorted.push(self.nodes[id].value);
        cursor = self.nodes[id].right;
      }
    }
    sorted
  }
}

/// Tree sort: insert everything into a binary search tree, then read it back in order.
pub fn tree_sort(values: Vec<f64>) -> SortResult {
  let mut tree = SearchTree::with_capacity(values.len());
  for value in values {
    tree.insert(value);
  }
  Ok(tree.into_sorted())
}
