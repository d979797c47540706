//! End-to-end script replay against the built-in cube seed.

use chisel_script::Session;
use mesh_types::seeds;

#[test]
fn subdivide_script_multiplies_faces_by_four() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("sd\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 1));

    assert_eq!(session.shape.face_count(), 48);
    // 8 seed vertices gained one midpoint per unique edge: strictly fewer
    // than the 36 a cube without shared edges would add
    assert_eq!(session.shape.vertex_count(), 26);
    assert!(session.shape.vertex_count() - 8 < 36);
}

#[test]
fn repeated_subdivision_compounds() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("sd\nsd\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 2));
    assert_eq!(session.shape.face_count(), 192); // 12 * 4^2
}

#[test]
fn sculpt_script_displaces_plus_z_face_outward() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("sd\n".as_bytes());
    assert!(stats.is_ok());

    let before = session.shape.clone();
    let stats = session.run("ip 0 0 0\nis 0 0 1\nid 1\nsc 0.5 0.2\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 4 && s.skipped == 0));

    let after = &session.shape;
    assert_eq!(after.vertex_count(), before.vertex_count());

    let mut max_dz = 0.0_f64;
    for (b, a) in before.vertices.iter().zip(after.vertices.iter()) {
        // Slope is +z: displacement is along +z only, bounded by the amount
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
        let dz = a.z - b.z;
        assert!(dz >= 0.0);
        assert!(dz <= 0.2 + 1e-12);
        max_dz = max_dz.max(dz);
    }

    // The subdivision pass put a vertex exactly at the contact point
    // (0, 0, 1): it must have moved by the full amount.
    assert!((max_dz - 0.2).abs() < 1e-12);
}

#[test]
fn snap_then_sculpt_uses_surface_contact() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("ip 0 0 0\nis 0 0 1\nid 1\nsi\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 4));
    assert!((session.instrument.point.z - 1.0).abs() < 1e-10);
}

#[test]
fn spherize_script_defaults_to_unit_radius() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("sm\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 1));

    // Corners were at radius sqrt(3); one pass moves them half-way to 1
    let expected = 3.0_f64.sqrt() * 0.5 + 0.5;
    for v in &session.shape.vertices {
        assert!((v.coords.norm() - expected).abs() < 1e-10);
    }
}

#[test]
fn spherize_script_accepts_explicit_radius() {
    let mut session = Session::new(seeds::cube());
    let stats = session.run("sm 3\n".as_bytes());
    assert!(stats.is_ok_and(|s| s.executed == 1));

    let expected = (3.0_f64.sqrt() + 3.0) * 0.5;
    for v in &session.shape.vertices {
        assert!((v.coords.norm() - expected).abs() < 1e-10);
    }
}

#[test]
fn malformed_lines_do_not_stop_the_replay() {
    let mut session = Session::new(seeds::cube());
    let script = "ip 1 2\nbogus line\nsd\nsc 0.5\nxy 0 0 0\n";
    let stats = session.run(script.as_bytes());

    // Only `sd` executed; the shape still subdivided
    assert!(stats.is_ok_and(|s| s.executed == 1 && s.skipped == 4));
    assert_eq!(session.shape.face_count(), 48);
}

#[test]
fn replay_is_deterministic() {
    let script = "sd\nip 0 0 0\nis 0.1 -0.2 1\nid 1\nsc 0.7 0.15\nsm\n";

    let mut a = Session::new(seeds::cube());
    let mut b = Session::new(seeds::cube());
    assert!(a.run(script.as_bytes()).is_ok());
    assert!(b.run(script.as_bytes()).is_ok());

    assert_eq!(a.shape.vertices, b.shape.vertices);
    assert_eq!(a.shape.faces, b.shape.faces);
}
