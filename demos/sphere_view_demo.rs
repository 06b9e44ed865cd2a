//! Scripted sphere-view session.
//!
//! Instantiates the controller through the plugin registry, feeds it a
//! short sequence of drags, scrolls and a frame switch against a headless
//! host, and prints the camera pose after each step.
//!
//! Run with `RUST_LOG=debug` to see the controller's own logging.

use sphereview::controller::props;
use sphereview::*;

fn print_pose(step: &str, controller: &dyn ViewController, context: &HeadlessContext) {
    let local = context.camera_pose();
    let world = controller
        .as_any()
        .downcast_ref::<SphereViewController>()
        .map(SphereViewController::camera_world_pose);
    println!("{step}");
    println!("  local position: {:?}", local.position);
    println!("  local rotation: {:?}", local.orientation);
    if let Some(world) = world {
        println!("  world position: {:?}", world.position);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut context = HeadlessContext::new("map");
    context.set_frame_pose(
        "base_link",
        Pose::new(Vec3::new(2.0, 1.0, 0.0), Quat::from_rotation_z(0.3)),
    );

    println!("registered view controllers: {:?}", view_controller_class_ids());
    let mut controller = create_view_controller(SPHERE_VIEW_CLASS_ID)?;
    controller.initialize(&mut context);
    controller.set_property(props::DISTANCE, &PropertyValue::Float(5.0), &mut context)?;
    controller.reset(&mut context);
    print_pose("reset", controller.as_ref(), &context);

    // Drag right and slightly down in ten small steps.
    for step in 0..10 {
        let event = MouseEvent::moved(
            step * 10,
            step * 2,
            (step + 1) * 10,
            (step + 1) * 2,
            MouseButtons {
                left: true,
                ..Default::default()
            },
        );
        controller.handle_mouse_event(&event, &mut context);
    }
    controller.update(0.016, 0.016, &mut context);
    print_pose("after drag", controller.as_ref(), &context);

    controller.handle_mouse_event(&MouseEvent::wheel(2), &mut context);
    controller.update(0.016, 0.016, &mut context);
    print_pose("after scroll", controller.as_ref(), &context);

    controller.set_property(
        props::TARGET_FRAME,
        &PropertyValue::Text("base_link".into()),
        &mut context,
    )?;
    controller.update(0.016, 0.016, &mut context);
    print_pose("after switching to base_link", controller.as_ref(), &context);

    println!(
        "saved config: {}",
        serde_json::to_string_pretty(&controller.save())?
    );
    println!("redraws requested: {}", context.render_requests());
    Ok(())
}
