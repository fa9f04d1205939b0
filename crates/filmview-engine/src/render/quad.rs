//! Static unit-quad geometry.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const H: f32 = 0.5;

/// Two triangles spanning [-0.5, 0.5] on both axes, drawn without indices.
pub(super) const UNIT_QUAD: [QuadVertex; 6] = [
    QuadVertex { pos: [-H, -H] },
    QuadVertex { pos: [H, -H] },
    QuadVertex { pos: [-H, H] },
    QuadVertex { pos: [-H, H] },
    QuadVertex { pos: [H, -H] },
    QuadVertex { pos: [H, H] },
];

pub(super) const UNIT_QUAD_VERTEX_COUNT: u32 = UNIT_QUAD.len() as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_two_floats() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 8);
        assert_eq!(QuadVertex::layout().array_stride, 8);
    }

    #[test]
    fn quad_spans_one_unit() {
        let xs = UNIT_QUAD.iter().map(|v| v.pos[0]);
        let ys = UNIT_QUAD.iter().map(|v| v.pos[1]);
        let (min_x, max_x) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
        let (min_y, max_y) = ys.fold((f32::MAX, f32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
        assert_eq!((min_x, max_x), (-0.5, 0.5));
        assert_eq!((min_y, max_y), (-0.5, 0.5));
        assert_eq!(UNIT_QUAD_VERTEX_COUNT, 6);
    }
}
