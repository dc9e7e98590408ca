//! HTML templates for the result report
//!
//! Templates are plain text with `{{slot}}` placeholders. Each template has a
//! context type that supplies already formatted and escaped slot values.

/// A section context that knows its template and how to fill each slot
pub trait TemplateContext {
    /// Template text with `{{slot}}` placeholders
    const TEMPLATE: &'static str;

    /// Value for a named slot
    fn slot(&self, name: &str) -> Option<&str>;

    /// Render the template with this context
    fn render(&self) -> String {
        fill(Self::TEMPLATE, |name| self.slot(name))
    }
}

/// Substitute `{{slot}}` placeholders in `template`.
///
/// Placeholders without a value are left in the output unchanged.
pub fn fill<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = after_open[..close].trim();
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        log::warn!("Template slot {name:?} has no value");
                        out.push_str(&rest[open..open + 2 + close + 2]);
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Whole page
pub struct PageContext {
    pub title: String,
    pub jquery_url: String,
    pub chart_script: String,
    pub device_info: String,
    pub results: String,
}

impl TemplateContext for PageContext {
    const TEMPLATE: &'static str = r#"<!doctype html>
<html lang="en-US">
<head>
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
  <script src="{{jquery_url}}"></script>
  <script>{{chart_script}}</script>
  <title>{{title}}</title>
  <style>
    .results {
      border-collapse: collapse;
      width: 100%;
    }
    .results td, .results th {
      border: 1px solid #ddd;
      padding: 6px;
    }
    .results tr:nth-child(even) {background-color: #eee;}
    .results tr:hover {background-color: #ddd;}
    .results th {
      padding: 10px;
      font-weight: bold;
      text-align: left;
      background-color: #333;
      color: white;
    }
  </style>
</head>
<body>
{{device_info}}
{{results}}
</body>
</html>"#;

    fn slot(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "jquery_url" => Some(&self.jquery_url),
            "chart_script" => Some(&self.chart_script),
            "device_info" => Some(&self.device_info),
            "results" => Some(&self.results),
            _ => None,
        }
    }
}

/// Session header
pub struct DeviceInfoContext {
    pub device: String,
    pub started_at: String,
}

impl TemplateContext for DeviceInfoContext {
    const TEMPLATE: &'static str = r#"<div id="device_info">
Benchmark for {{device}}, started at {{started_at}}
</div>"#;

    fn slot(&self, name: &str) -> Option<&str> {
        match name {
            "device" => Some(&self.device),
            "started_at" => Some(&self.started_at),
            _ => None,
        }
    }
}

/// One result table
pub struct GroupContext {
    pub accuracy_headers: String,
    pub rows: String,
}

impl TemplateContext for GroupContext {
    const TEMPLATE: &'static str = r#"<div>
<table class="results">
 <tr>
   <th>Name</th>
   <th>Backend</th>
   <th>Iterations</th>
   <th>Test set size</th>
   <th>Average latency ms</th>
   {{accuracy_headers}}
   <th>Latency frequency</th>
 </tr>
 {{rows}}
</table>
</div>"#;

    fn slot(&self, name: &str) -> Option<&str> {
        match name {
            "accuracy_headers" => Some(&self.accuracy_headers),
            "rows" => Some(&self.rows),
            _ => None,
        }
    }
}

/// One result row and its latency chart
pub struct RowContext {
    pub name: String,
    pub backend: String,
    pub iterations: String,
    pub testset_size: String,
    pub average_latency: String,
    pub accuracy_cells: String,
    pub chart_width: String,
    pub chart_id: String,
    pub chart_label: String,
    pub labels: String,
    pub counts: String,
}

impl TemplateContext for RowContext {
    const TEMPLATE: &'static str = r#"
  <tr>
   <td>{{name}}</td>
   <td>{{backend}}</td>
   <td>{{iterations}}</td>
   <td>{{testset_size}}</td>
   <td>{{average_latency}}</td>
   {{accuracy_cells}}
   <td class="container" style="width: {{chart_width}}px;">
    <canvas id="{{chart_id}}" class="latency_chart"></canvas>
  </td>
 </tr>
 <script>
   $(function() {
       var freqData = {
         labels: {{labels}},
         datasets: [ {
            label: {{chart_label}},
            data: {{counts}},
            backgroundColor: 'rgba(255, 99, 132, 0.6)',
            borderColor:  'rgba(255, 0, 0, 0.6)',
            borderWidth: 1,
         } ]
       };
       var ctx = $('#{{chart_id}}')[0].getContext('2d');
       window.{{chart_id}} = new Chart(ctx,
        {
          type: 'bar',
          data: freqData,
          options: {
           responsive: true,
           title: {
             display: true,
             text: 'Latency frequency'
           },
           legend: {
             display: false
           },
           scales: {
            xAxes: [ {
              barPercentage: 1.0,
              categoryPercentage: 0.9,
            } ],
            yAxes: [ {
              scaleLabel: {
                display: true,
                labelString: 'Iterations Count'
              }
            } ]
           }
         }
       });
     });
  </script>"#;

    fn slot(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "backend" => Some(&self.backend),
            "iterations" => Some(&self.iterations),
            "testset_size" => Some(&self.testset_size),
            "average_latency" => Some(&self.average_latency),
            "accuracy_cells" => Some(&self.accuracy_cells),
            "chart_width" => Some(&self.chart_width),
            "chart_id" => Some(&self.chart_id),
            "chart_label" => Some(&self.chart_label),
            "labels" => Some(&self.labels),
            "counts" => Some(&self.counts),
            _ => None,
        }
    }
}

/// Accuracy column header
pub struct HeaderCellContext<'a> {
    pub text: &'a str,
}

impl TemplateContext for HeaderCellContext<'_> {
    const TEMPLATE: &'static str = "\n<th>{{text}}</th>";

    fn slot(&self, name: &str) -> Option<&str> {
        (name == "text").then_some(self.text)
    }
}

/// Accuracy value cell
pub struct ValueCellContext<'a> {
    pub text: &'a str,
}

impl TemplateContext for ValueCellContext<'_> {
    const TEMPLATE: &'static str = "\n<td>{{text}}</td>";

    fn slot(&self, name: &str) -> Option<&str> {
        (name == "text").then_some(self.text)
    }
}
