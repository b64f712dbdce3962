pub(super) const INDEX_HTML: &str = r#"<!DOCTYPE html>
  <html lang="he" dir="rtl">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>pointmap</title>
    <link rel="stylesheet" href="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css" />
    <style>
      html, body { height: 100%; margin: 0; padding: 0; }
      #map { height: 100%; width: 100%; }
      #layer-toggler {
        position: absolute;
        top: 12px;
        right: 12px;
        z-index: 1000;
        background: white;
        padding: 6px 10px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
        line-height: 26px;
      }
      #time-filter {
        position: absolute;
        bottom: 24px;
        left: 50%;
        transform: translateX(-50%);
        width: 60%;
        z-index: 1000;
        background: white;
        padding: 6px 10px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
        direction: ltr;
      }
      #slider { width: 100%; }
      #slider:disabled { opacity: 0.4; }
      #values { display: flex; justify-content: space-between; font-size: 12px; }
    </style>
  </head>
  <body>
    <div id="map"></div>
    <div id="layer-toggler"><div id="layer-toggler-inner"></div></div>
    <div id="time-filter">
      <input type="range" id="slider" disabled />
      <div id="values"></div>
    </div>

    <script src="https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js"></script>
    <script>
      const slider = document.getElementById('slider');
      const values = document.getElementById('values');
      const toggler = document.getElementById('layer-toggler-inner');

      const post = (url, body) => fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body || {}),
      });

      function applyChanges(map, changes) {
        changes.forEach(change => {
          if (!map.getLayer(change.layer)) return;
          if (change.op === 'layout_property') {
            map.setLayoutProperty(change.layer, change.name, change.value);
          } else if (change.op === 'filter') {
            map.setFilter(change.layer, change.filter);
          }
        });
      }

      function applySlider(state, html) {
        slider.disabled = !state.enabled;
        if (state.enabled) {
          slider.min = state.min;
          slider.max = state.max;
        }
        values.innerHTML = html;
      }

      function syncCheckboxes(layers) {
        toggler.querySelectorAll('input.toggler').forEach(input => {
          const layer = layers.find(l => l.name === input.name);
          input.checked = !!(layer && layer.visible);
        });
      }

      async function init(map) {
        const info = await (await fetch('/layers')).json();
        map.jumpTo({ center: info.center, zoom: info.zoom });
        toggler.innerHTML = info.toggler;
        syncCheckboxes(info.layers);
        applySlider(info.slider, info.values);

        const style = await (await fetch('/style')).json();
        Object.entries(style.sources).forEach(([id, source]) => map.addSource(id, source));
        style.layers.forEach(layer => map.addLayer(layer));

        info.layers.forEach(({ name }) => {
          if (!style.sources[name]) return;
          map.on('click', name, async e => {
            const feature = e.features[0];
            const res = await post('/popup', { layer: name, feature: feature.id, lng: e.lngLat.lng });
            if (!res.ok) return;
            const popup = await res.json();
            new maplibregl.Popup().setLngLat(popup.lng_lat).setHTML(popup.html).addTo(map);
          });
        });

        toggler.querySelectorAll('input.toggler').forEach(input => {
          input.addEventListener('change', async () => {
            const res = await post(`/layers/${encodeURIComponent(input.name)}/toggle`);
            if (!res.ok) { input.checked = false; return; }
            const result = await res.json();
            applyChanges(map, result.changes);
            applySlider(result.slider, result.values);
            const current = await (await fetch('/layers')).json();
            syncCheckboxes(current.layers);
          });
        });

        slider.addEventListener('input', async () => {
          const res = await post('/filter', { value: +slider.value });
          if (!res.ok) return;
          applyChanges(map, (await res.json()).changes);
        });
      }

      const map = new maplibregl.Map({
        container: 'map',
        style: {
          version: 8,
          glyphs: 'https://fonts.openmaptiles.org/{fontstack}/{range}.pbf',
          sources: {
            osm: {
              type: 'raster',
              tiles: ['https://tile.openstreetmap.org/{z}/{x}/{y}.png'],
              tileSize: 256,
              attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
            }
          },
          layers: [{ id: 'osm', type: 'raster', source: 'osm' }]
        },
        center: [0, 0],
        zoom: 2
      });

      map.on('load', () => init(map).catch(console.error));
    </script>
  </body>
  </html>
"#;
