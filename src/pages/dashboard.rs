use chrono::{Datelike, NaiveDate};
use gloo_net::http::Request;
use yew::prelude::*;

use crate::utils::constants::RESERVATIONS_CSV_PATH;

const COLORS: [&str; 10] = [
    "#2563eb", "#22c55e", "#f97316", "#a855f7", "#ef4444",
    "#14b8a6", "#8b5cf6", "#eab308", "#0ea5e9", "#ec4899",
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin",
    "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

#[derive(Debug, Clone, PartialEq)]
struct ReservationRow {
    spectacle: String,
    date: String,
    tickets: u32,
}

/// CSV nom_spectacle,date,quantite_tickets - l'en-tête est sauté, les
/// lignes illisibles sont ignorées
fn parse_reservations_csv(text: &str) -> Vec<ReservationRow> {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let mut fields = line.split(',');
            let spectacle = fields.next()?.trim();
            let date = fields.next()?.trim();
            let tickets = fields.next()?.trim().parse::<u32>().ok()?;
            if spectacle.is_empty() {
                return None;
            }
            Some(ReservationRow {
                spectacle: spectacle.to_string(),
                date: date.to_string(),
                tickets,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct ChartEntry {
    label: String,
    value: u32,
    color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct DashboardStats {
    total_tickets: u32,
    total_orders: usize,
    spectacle_count: usize,
    /// tickets par spectacle, triés décroissant
    by_show: Vec<ChartEntry>,
    /// tickets par mois calendaire (janvier..décembre)
    by_month: [u32; 12],
}

fn compute_stats(rows: &[ReservationRow]) -> DashboardStats {
    let mut by_show: Vec<(String, u32)> = Vec::new();
    let mut by_month = [0u32; 12];

    for row in rows {
        match by_show.iter_mut().find(|(name, _)| name == &row.spectacle) {
            Some((_, total)) => *total += row.tickets,
            None => by_show.push((row.spectacle.clone(), row.tickets)),
        }

        if let Ok(date) = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") {
            by_month[date.month0() as usize] += row.tickets;
        }
    }

    let spectacle_count = by_show.len();
    let mut by_show: Vec<ChartEntry> = by_show
        .into_iter()
        .enumerate()
        .map(|(idx, (label, value))| ChartEntry {
            label,
            value,
            color: COLORS[idx % COLORS.len()],
        })
        .collect();
    by_show.sort_by(|a, b| b.value.cmp(&a.value));

    DashboardStats {
        total_tickets: rows.iter().map(|r| r.tickets).sum(),
        total_orders: rows.len(),
        spectacle_count,
        by_show,
        by_month,
    }
}

fn bar_chart(title: &'static str, data: &[ChartEntry], value_label: &'static str) -> Html {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0).max(1);
    html! {
        <div class="card">
            <h3>{title}</h3>
            <div class="bar-chart">
                { for data.iter().map(|entry| {
                    let width = (entry.value as f64 / max as f64) * 100.0;
                    html! {
                        <div key={entry.label.clone()} class="bar-row">
                            <span class="bar-label">{entry.label.clone()}</span>
                            <div class="bar-track">
                                <div
                                    class="bar-fill"
                                    style={format!(
                                        "width: {:.1}%; background-color: {};",
                                        width, entry.color
                                    )}
                                />
                            </div>
                            <span class="bar-value">
                                {format!("{} {}", entry.value, value_label)}
                            </span>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn pie_chart(title: &'static str, data: &[ChartEntry]) -> Html {
    let total: u32 = data.iter().map(|d| d.value).sum();
    let total = total.max(1);

    let mut current = 0.0;
    let gradients = data
        .iter()
        .map(|entry| {
            let start = current;
            let end = start + (entry.value as f64 / total as f64) * 100.0;
            current = end;
            format!("{} {:.2}% {:.2}%", entry.color, start, end)
        })
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div class="card pie-card">
            <h3>{title}</h3>
            <div class="pie-wrapper">
                <div
                    class="pie"
                    style={format!("background: conic-gradient({})", gradients)}
                />
                <div class="pie-legend">
                    { for data.iter().map(|entry| {
                        let percent =
                            ((entry.value as f64 / total as f64) * 100.0).round() as u32;
                        html! {
                            <div key={entry.label.clone()} class="legend-row">
                                <span
                                    class="legend-dot"
                                    style={format!("background-color: {}", entry.color)}
                                />
                                <span class="legend-label">{entry.label.clone()}</span>
                                <span class="legend-value">
                                    {format!("{}% ({})", percent, entry.value)}
                                </span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

/// Dashboard admin des ventes, alimenté par le dataset CSV des réservations
/// (monté derrière la garde Admin).
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let rows = use_state(Vec::<ReservationRow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let response = Request::get(RESERVATIONS_CSV_PATH)
                        .send()
                        .await
                        .map_err(|e| e.to_string())?;
                    if !response.ok() {
                        return Err("Fichier CSV introuvable".to_string());
                    }
                    response.text().await.map_err(|e| e.to_string())
                }
                .await;

                match result {
                    Ok(text) => rows.set(parse_reservations_csv(&text)),
                    Err(err) => {
                        log::error!("❌ Erreur chargement dataset: {}", err);
                        error.set(Some("Impossible de charger le dataset".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="loading">{"Chargement du dashboard..."}</div> };
    }
    if let Some(message) = (*error).clone() {
        return html! { <div class="error">{message}</div> };
    }

    let stats = compute_stats(&rows);
    let month_data: Vec<ChartEntry> = MONTH_LABELS
        .iter()
        .zip(stats.by_month.iter())
        .map(|(label, value)| ChartEntry {
            label: label.to_string(),
            value: *value,
            color: "#2563eb",
        })
        .collect();

    html! {
        <div class="dashboard-page">
            <h2>{"Dashboard Réservations"}</h2>

            <div class="kpi-grid">
                <div class="card kpi">
                    <p class="kpi-label">{"Tickets vendus"}</p>
                    <p class="kpi-value">{stats.total_tickets}</p>
                </div>
                <div class="card kpi">
                    <p class="kpi-label">{"Commandes"}</p>
                    <p class="kpi-value">{stats.total_orders}</p>
                </div>
                <div class="card kpi">
                    <p class="kpi-label">{"Spectacles suivis"}</p>
                    <p class="kpi-value">{stats.spectacle_count}</p>
                </div>
            </div>

            <div class="charts-grid">
                { bar_chart("Tickets par spectacle", &stats.by_show, "tickets") }
                { pie_chart("Répartition par spectacle", &stats.by_show) }
                { bar_chart("Tickets par mois", &month_data, "tickets") }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "nom_spectacle,date,quantite_tickets\n\
                       Le Roi Lion,2024-02-10,4\n\
                       Phantom,2024-02-14,2\n\
                       Le Roi Lion,2024-03-01,3\n\
                       \n\
                       ligne illisible\n\
                       Impro Show,2024-06-08,pas-un-nombre\n";

    #[test]
    fn csv_parsing_skips_header_and_bad_lines() {
        let rows = parse_reservations_csv(CSV);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].spectacle, "Le Roi Lion");
        assert_eq!(rows[0].tickets, 4);
    }

    #[test]
    fn stats_aggregate_per_show_sorted_descending() {
        let rows = parse_reservations_csv(CSV);
        let stats = compute_stats(&rows);

        assert_eq!(stats.total_tickets, 9);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.spectacle_count, 2);
        assert_eq!(stats.by_show[0].label, "Le Roi Lion");
        assert_eq!(stats.by_show[0].value, 7);
        assert_eq!(stats.by_show[1].value, 2);
    }

    #[test]
    fn stats_aggregate_per_calendar_month() {
        let rows = parse_reservations_csv(CSV);
        let stats = compute_stats(&rows);

        assert_eq!(stats.by_month[1], 6); // février
        assert_eq!(stats.by_month[2], 3); // mars
        assert_eq!(stats.by_month[0], 0);
    }

    #[test]
    fn empty_dataset_gives_empty_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_tickets, 0);
        assert!(stats.by_show.is_empty());
        assert_eq!(stats.by_month, [0u32; 12]);
    }
}
