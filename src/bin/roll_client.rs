//! Smoke client for a locally running server. Hits every route and prints
//! the plain-text bodies, mirroring a manual curl session.

async fn get_text(client: &reqwest::Client, url: String) -> Result<String, reqwest::Error> {
    client.get(url).send().await?.text().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let base_url = "http://127.0.0.1:8080";

    println!("--- 🎲 DICE ARENA SMOKE CLIENT ---");

    println!("\n[1] Single roll...");
    print!("{}", get_text(&client, format!("{base_url}/rolldice?player=Alice")).await?);

    println!("\n[2] Best of three...");
    print!(
        "{}",
        get_text(&client, format!("{base_url}/rolldice?player=Alice&mode=bestof3")).await?
    );

    println!("\n[3] Battle...");
    print!(
        "{}",
        get_text(
            &client,
            format!("{base_url}/rolldice?player=Alice&mode=battle&opponent=Bob"),
        )
        .await?
    );

    println!("\n[4] Leaderboard...");
    print!("{}", get_text(&client, format!("{base_url}/leaderboard")).await?);

    println!("\n[5] Logs...");
    let resp = client.get(format!("{base_url}/logs")).send().await?;
    if resp.status().is_success() {
        print!("{}", resp.text().await?);
    } else {
        println!("logbook disabled (status {})", resp.status());
    }

    println!("\n[6] Reset...");
    let resp = client.post(format!("{base_url}/metrics/reset")).send().await?;
    print!("{}", resp.text().await?);

    Ok(())
}
