//! Asset fetching: raw bytes over `fetch`, and binary glTF flattened into a
//! single `CpuMesh` with node transforms baked in.

use crate::constants::DEFAULT_MESH_COLOR;
use crate::core::CpuMesh;
use anyhow::{anyhow, Context, Result};
use glam::Mat4;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_array_buffer(url: &str) -> Result<js_sys::ArrayBuffer> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|_| anyhow!("fetch {}: not a Response", url))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow!("arrayBuffer {}: {:?}", url, e))?;
    JsFuture::from(buf)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| anyhow!("read {}: not an ArrayBuffer", url))
}

pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let buf = fetch_array_buffer(url).await?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch a `.glb` and merge every triangle primitive of its default scene.
pub async fn load_glb(url: &str) -> Result<CpuMesh> {
    let bytes = fetch_bytes(url).await?;
    let mesh = parse_glb(&bytes).with_context(|| format!("parse {}", url))?;
    log::info!(
        "[assets] {} vertices={} indices={}",
        url,
        mesh.vertices.len(),
        mesh.indices.len()
    );
    Ok(mesh)
}

fn parse_glb(bytes: &[u8]) -> Result<CpuMesh> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    // Textures are not used; only buffers are imported.
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow!("no scene"))?;

    let mut mesh = CpuMesh::default();
    for node in scene.nodes() {
        append_node(&mut mesh, &node, Mat4::IDENTITY, &buffers);
    }
    if mesh.is_empty() {
        return Err(anyhow!("no triangle geometry"));
    }
    Ok(mesh)
}

fn append_node(
    out: &mut CpuMesh,
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(m) = node.mesh() {
        for prim in m.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
            let indices: Option<Vec<u32>> = reader.read_indices().map(|i| i.into_u32().collect());
            let base = prim.material().pbr_metallic_roughness().base_color_factor();
            let color = if prim.material().index().is_some() {
                [base[0], base[1], base[2]]
            } else {
                DEFAULT_MESH_COLOR
            };
            out.append(
                &world,
                &positions,
                normals.as_deref(),
                indices.as_deref(),
                color,
            );
        }
    }
    for child in node.children() {
        append_node(out, &child, world, buffers);
    }
}
