use cgmath::Vector3;

use crate::model::MeshModel;

/******************************************************************************/

pub type SphereModel = MeshModel<Vector3<f32>, u32>;

/// Sizes a renderer needs to allocate vertex and index buffers for a model.
pub trait BufferModel {
    fn vertex_size(&self) -> usize;
    fn vertex_num(&self) -> usize;
    fn vertex_buffer_size(&self) -> usize {
        self.vertex_num() * self.vertex_size()
    }

    fn index_size(&self) -> usize;
    fn index_num(&self) -> usize;
    fn index_buffer_size(&self) -> usize {
        self.index_num() * self.index_size()
    }

    fn is_indexed(&self) -> bool {
        self.index_num() != 0
    }
}

impl<V, I> BufferModel for MeshModel<V, I> {
    fn vertex_size(&self) -> usize {
        std::mem::size_of::<V>()
    }

    fn vertex_num(&self) -> usize {
        self.vertices.len()
    }

    fn index_size(&self) -> usize {
        std::mem::size_of::<I>()
    }

    fn index_num(&self) -> usize {
        self.indices.len()
    }
}
