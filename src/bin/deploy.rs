//! Deployment helper. Prints the manual checklist and performs no actions.

fn main() {
    let line = "=".repeat(60);

    println!("\n{line}");
    println!("Flower Lighting - Deployment Helper");
    println!("{line}\n");

    println!("DEPLOYMENT CHECKLIST:\n");

    let steps = [
        ("Build the release binaries", "cargo build --release"),
        (
            "Set the blob-store connection string (optional)",
            "export DATABASE_URL=postgres://...",
        ),
        (
            "Override staff credentials for the environment",
            "export STAFF_EMAIL=... STAFF_PASSWORD=...",
        ),
        (
            "Pick the listen port (default 4321)",
            "export PORT=4321",
        ),
        (
            "Start the storefront api behind your reverse proxy",
            "./target/release/flower-lighting",
        ),
    ];

    for (num, (title, action)) in steps.iter().enumerate() {
        println!("{}. {title}", num + 1);
        println!("   $ {action}\n");
    }

    println!("{line}");
    println!("The api serves GET /api/blob; all shop data stays client-side.");
    println!("{line}\n");
}
