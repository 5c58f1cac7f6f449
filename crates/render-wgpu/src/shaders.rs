/// WGSL shader for lit scene meshes.
///
/// Lambert diffuse from up to four directional lights plus ambient. Back
/// faces of double-sided meshes are lit with a flipped normal.
pub const MESH_SHADER: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    ambient: vec4<f32>,
    light_dirs: array<vec4<f32>, 4>,
    light_colors: array<vec4<f32>, 4>,
    light_count: vec4<u32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = scene.view_proj * world_pos;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    var n = normalize(in.world_normal);
    if !front {
        n = -n;
    }

    var light = scene.ambient.rgb;
    for (var i = 0u; i < scene.light_count.x; i = i + 1u) {
        let diffuse = max(dot(n, scene.light_dirs[i].xyz), 0.0);
        light = light + scene.light_colors[i].rgb * diffuse;
    }
    return vec4<f32>(in.color.rgb * light, in.color.a);
}
"#;
