use std::iter::Iterator;
use std::slice::ChunksExact;
use std::vec::Vec;

/******************************************************************************/

pub trait FromUsize {
    fn from_usize(v: usize) -> Self;
    fn to_usize(&self) -> usize;
}

impl FromUsize for u16 {
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= u16::MAX as usize, "index {} does not fit into u16", v);
        v as u16
    }
    fn to_usize(&self) -> usize {
        *self as usize
    }
}

impl FromUsize for u32 {
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= u32::MAX as usize, "index {} does not fit into u32", v);
        v as u32
    }
    fn to_usize(&self) -> usize {
        *self as usize
    }
}

/// Indexed triangle mesh: `indices` is read in triples.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshModel<V, I> {
    pub vertices: Vec<V>,
    pub indices: Vec<I>,
}

impl<V, I> MeshModel<V, I> {
    pub fn new() -> Self {
        MeshModel{vertices: Vec::new(), indices: Vec::new()}
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        MeshModel{vertices: Vec::with_capacity(vertices), indices: Vec::with_capacity(indices)}
    }
}

impl<V, I> Default for MeshModel<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

pub trait VertexModel<V, I> {
    fn push_vertex(&mut self, v: V) -> I;
    fn push_index(&mut self, i: I);

    fn set_vertex(&mut self, i: I, v: V);
    fn get_vertex(&self, i: I) -> &V;

    fn clear_vertices(&mut self);
}

impl<V, I> VertexModel<V, I> for MeshModel<V, I> where I: FromUsize {
    fn push_vertex(&mut self, v: V) -> I {
        let i = self.vertices.len();
        self.vertices.push(v);
        I::from_usize(i)
    }

    fn push_index(&mut self, i: I) {
        self.indices.push(i);
    }

    fn set_vertex(&mut self, i: I, v: V) {
        let index = i.to_usize();
        self.vertices[index] = v;
    }

    fn get_vertex(&self, i: I) -> &V {
        let index = i.to_usize();
        &self.vertices[index]
    }

    fn clear_vertices(&mut self) {
        self.vertices.clear();
    }
}

pub trait TriangleModel<V, I> where Self: VertexModel<V, I> {
    fn push_triangle_indexes(&mut self, a: I, b: I, c: I) {
        self.push_index(a);
        self.push_index(b);
        self.push_index(c);
    }
}

impl<V, I> TriangleModel<V, I> for MeshModel<V, I> where I: FromUsize {
}

/******************************************************************************/

pub struct TriangleRef<'a, V> {
    pub a: &'a V,
    pub b: &'a V,
    pub c: &'a V,
}

pub struct TriangleIterator<'a, V, I> {
    vertices: &'a [V],
    chunks: ChunksExact<'a, I>,
    n: usize,
}

impl<'a, V, I> Iterator for TriangleIterator<'a, V, I> where I: FromUsize {
    type Item = (usize, TriangleRef<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chunks.next()?;
        let t = TriangleRef{ a: &self.vertices[c[0].to_usize()]
                           , b: &self.vertices[c[1].to_usize()]
                           , c: &self.vertices[c[2].to_usize()] };
        let n = self.n;
        self.n += 1;
        Some((n, t))
    }
}

impl<V, I> MeshModel<V, I> where I: FromUsize {
    /// Triangles of the index list; a trailing incomplete triple is skipped.
    pub fn triangles(&self) -> TriangleIterator<'_, V, I> {
        TriangleIterator{ vertices: &self.vertices, chunks: self.indices.chunks_exact(3), n: 0 }
    }

    pub fn triangle_num(&self) -> usize {
        self.indices.len() / 3
    }
}
