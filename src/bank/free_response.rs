//! Free-response prompts with expected answers and four-tier rubrics.
//!
//! Math topics get worked problems: the family matching the topic first, then
//! every other family, so a long request still has distinct prompts. English
//! requests get the generic prompts for every domain.

use super::{FrTemplate, RubricStyle};
use crate::classify::{Domain, Level};
use crate::domain::Language;

macro_rules! fr {
  ($style:ident, $prompt:expr, [$($exp:expr),+ $(,)?], [$r100:expr, $r75:expr, $r50:expr, $r25:expr]) => {
    FrTemplate { prompt: $prompt, expected: &[$($exp),+], rubric: [$r100, $r75, $r50, $r25], style: RubricStyle::$style }
  };
}

const GENERIC: &[FrTemplate] = &[
  fr!(Scored,
    "Explica con tus propias palabras qué es {topic} y por qué es importante estudiarlo. Incluye al menos dos ejemplos.",
    ["Definición clara de {topic}", "Importancia/relevancia del tema", "Al menos 2 ejemplos concretos"],
    ["Definición correcta + importancia + 2 ejemplos",
     "Definición + importancia O definición + 2 ejemplos",
     "Solo definición correcta O solo ejemplos",
     "Intento de respuesta con algún concepto correcto"]),
  fr!(Scored,
    "Describe cómo se relaciona {topic} con situaciones de tu vida cotidiana. Fundamenta tu respuesta.",
    ["Conexión entre {topic} y la vida diaria", "Al menos 2 situaciones cotidianas", "Fundamentación/explicación de cada relación"],
    ["2+ situaciones bien fundamentadas",
     "2 situaciones con fundamentación básica",
     "1 situación bien explicada",
     "Intento con alguna relación identificada"]),
  fr!(Scored,
    "Analiza las principales características de {topic} y explica cómo estas se aplican en la práctica.",
    ["Al menos 3 características principales de {topic}", "Explicación de cada característica", "Aplicación práctica de cada una"],
    ["3+ características con aplicación práctica",
     "3 características sin aplicación O 2 con aplicación",
     "2 características identificadas",
     "1 característica correcta"]),
  fr!(Scored,
    "¿Qué aprendiste sobre {topic}? Menciona al menos tres aspectos importantes y explica cada uno.",
    ["3 aspectos importantes de {topic}", "Explicación de cada aspecto", "Demostración de comprensión del tema"],
    ["3 aspectos bien explicados",
     "3 aspectos con explicación básica O 2 bien explicados",
     "2 aspectos mencionados",
     "1 aspecto correcto"]),
  fr!(Scored,
    "Compara {topic} con otros temas que hayas estudiado. ¿Qué similitudes y diferencias encuentras?",
    ["Identificación de tema(s) relacionados", "Al menos 2 similitudes", "Al menos 2 diferencias", "Análisis comparativo coherente"],
    ["2+ similitudes y 2+ diferencias",
     "2 similitudes O 2 diferencias bien explicadas",
     "1 similitud y 1 diferencia",
     "Intento de comparación con algún elemento correcto"]),
];

const GENERIC_EN: &[FrTemplate] = &[
  fr!(Scored,
    "Explain in your own words what {topic} is and why it is worth studying. Include at least two examples.",
    ["Clear definition of {topic}", "Why the topic matters", "At least 2 concrete examples"],
    ["Correct definition + importance + 2 examples",
     "Definition + importance OR definition + 2 examples",
     "Only a correct definition OR only examples",
     "Attempted answer with some correct idea"]),
  fr!(Scored,
    "Describe how {topic} relates to situations in your everyday life. Support your answer.",
    ["Connection between {topic} and daily life", "At least 2 everyday situations", "Reasoning for each connection"],
    ["2+ well-supported situations",
     "2 situations with basic reasoning",
     "1 well-explained situation",
     "Attempt with some connection identified"]),
  fr!(Scored,
    "Analyze the main features of {topic} and explain how they apply in practice.",
    ["At least 3 main features of {topic}", "Explanation of each feature", "Practical application of each one"],
    ["3+ features with practical application",
     "3 features without application OR 2 with application",
     "2 features identified",
     "1 correct feature"]),
  fr!(Scored,
    "What did you learn about {topic}? Name at least three important points and explain each one.",
    ["3 important points about {topic}", "Explanation of each point", "Evidence of understanding the topic"],
    ["3 well-explained points",
     "3 points with basic explanation OR 2 well explained",
     "2 points mentioned",
     "1 correct point"]),
  fr!(Scored,
    "Compare {topic} with other topics you have studied. What similarities and differences do you find?",
    ["Related topic(s) identified", "At least 2 similarities", "At least 2 differences", "Coherent comparison"],
    ["2+ similarities and 2+ differences",
     "2 similarities OR 2 differences well explained",
     "1 similarity and 1 difference",
     "Attempted comparison with some correct element"]),
];

const MATH_OPEN: &[FrTemplate] = &[
  fr!(Outline,
    "{Topic}: plantea un problema práctico relacionado con el tema, identifica los datos, resuelve paso a paso y verifica tu respuesta.",
    ["Identificación de datos del problema", "Planteamiento de la operación", "Desarrollo paso a paso", "Resultado final verificado"],
    ["Todos los pasos correctos",
     "Procedimiento correcto con pequeño error",
     "Planteamiento correcto",
     "Identifica datos del problema"]),
];

const ADD_SUB_L1: &[FrTemplate] = &[
  fr!(Solution,
    "Tienes 8 manzanas y tu mamá te da 5 más. ¿Cuántas manzanas tienes ahora? Dibuja las manzanas y escribe el resultado.",
    ["Operación: 8 + 5 = 13", "Resultado: 13 manzanas"],
    ["Operación correcta + resultado correcto + dibujo",
     "Operación y resultado correctos sin dibujo",
     "Operación planteada correctamente pero error en cálculo",
     "Intento de suma identificado"]),
  fr!(Solution,
    "Había 12 pájaros en un árbol. Se fueron 4 volando. ¿Cuántos pájaros quedaron? Haz un dibujo y escribe la resta.",
    ["Operación: 12 - 4 = 8", "Resultado: 8 pájaros"],
    ["Resta correcta + resultado + dibujo",
     "Resta y resultado correctos",
     "Operación planteada bien, error en cálculo",
     "Identifica que es resta"]),
  fr!(Solution,
    "María tiene 6 lápices rojos y 7 lápices azules. ¿Cuántos lápices tiene en total? Escribe la suma.",
    ["Operación: 6 + 7 = 13", "Resultado: 13 lápices"],
    ["Suma correcta + resultado",
     "Operación planteada correctamente",
     "Error de cálculo menor (±1)",
     "Identifica que es suma"]),
  fr!(Solution,
    "Pedro tenía 15 caramelos. Le dio 6 a su hermana. ¿Cuántos caramelos le quedan? Escribe el cálculo.",
    ["Operación: 15 - 6 = 9", "Resultado: 9 caramelos"],
    ["Resta correcta + resultado",
     "Operación bien planteada",
     "Error de cálculo menor",
     "Identifica operación"]),
  fr!(Solution,
    "En una caja hay 9 pelotas. Sacamos 3 pelotas. ¿Cuántas pelotas quedan en la caja?",
    ["Operación: 9 - 3 = 6", "Resultado: 6 pelotas"],
    ["Resta y resultado correctos",
     "Operación planteada bien",
     "Error menor en cálculo",
     "Intento válido"]),
];

const ADD_SUB_L2: &[FrTemplate] = &[
  fr!(Solution,
    "En una biblioteca hay 156 libros de cuentos y 87 libros de ciencia. ¿Cuántos libros hay en total? Muestra tu procedimiento.",
    ["Operación: 156 + 87 = 243", "Resultado: 243 libros", "Procedimiento: Suma con reserva"],
    ["Resultado correcto con procedimiento",
     "Resultado correcto sin procedimiento",
     "Procedimiento correcto, error de cálculo",
     "Identifica la operación correcta"]),
  fr!(Solution,
    "Juan tiene 250 figuritas. Le regala 75 a su amigo. ¿Cuántas figuritas le quedan? Desarrolla paso a paso.",
    ["Operación: 250 - 75 = 175", "Resultado: 175 figuritas"],
    ["Resultado correcto con desarrollo",
     "Resultado correcto",
     "Error de cálculo con procedimiento correcto",
     "Plantea la resta correctamente"]),
  fr!(Solution,
    "Una tienda vendió 328 helados el lunes y 195 el martes. ¿Cuántos helados vendió en total? Muestra el cálculo.",
    ["Operación: 328 + 195 = 523", "Resultado: 523 helados"],
    ["Suma correcta con procedimiento",
     "Resultado correcto",
     "Error de cálculo menor",
     "Identifica que es suma"]),
  fr!(Solution,
    "Había 500 personas en un estadio. Se fueron 168. ¿Cuántas personas quedaron?",
    ["Operación: 500 - 168 = 332", "Resultado: 332 personas"],
    ["Resta correcta",
     "Procedimiento correcto",
     "Error de cálculo",
     "Plantea resta"]),
];

const ADD_SUB_L3: &[FrTemplate] = &[
  fr!(Solution,
    "María tiene 45 manzanas. Le regala 18 a su vecino y luego compra 27 más en el mercado. ¿Cuántas manzanas tiene ahora? Muestra el procedimiento completo.",
    ["Paso 1: 45 - 18 = 27 manzanas", "Paso 2: 27 + 27 = 54 manzanas", "Resultado: 54 manzanas"],
    ["Ambas operaciones correctas con procedimiento",
     "Resultado correcto sin procedimiento detallado",
     "Una operación correcta",
     "Identifica las operaciones necesarias"]),
  fr!(Solution,
    "Un bus viaja con 38 pasajeros. En la primera parada bajan 12 y suben 9. En la segunda parada bajan 8 y suben 15. ¿Cuántos pasajeros hay al final? Desarrolla paso a paso.",
    ["Inicial: 38 pasajeros", "Parada 1: 38 - 12 + 9 = 35 pasajeros", "Parada 2: 35 - 8 + 15 = 42 pasajeros", "Resultado: 42 pasajeros"],
    ["Todas las operaciones correctas paso a paso",
     "Resultado correcto con procedimiento básico",
     "Dos paradas calculadas correctamente",
     "Una parada calculada correctamente"]),
  fr!(Solution,
    "Pedro ahorra $125 el lunes, $89 el martes y gasta $67 el miércoles. ¿Cuánto dinero tiene? Explica tu procedimiento.",
    ["Total ahorrado: 125 + 89 = $214", "Después del gasto: 214 - 67 = $147", "Resultado: $147"],
    ["Cálculo correcto con procedimiento",
     "Resultado correcto",
     "Suma correcta pero error en resta",
     "Identifica las operaciones"]),
];

const MULTIPLICATION: &[FrTemplate] = &[
  fr!(Solution,
    "Una caja contiene 24 lápices. Si hay 15 cajas, ¿cuántos lápices hay en total? Muestra tu procedimiento.",
    ["Operación: 24 × 15 = 360", "Resultado: 360 lápices"],
    ["Multiplicación correcta con procedimiento",
     "Resultado correcto",
     "Error de cálculo con procedimiento válido",
     "Identifica que es multiplicación"]),
  fr!(Solution,
    "Un teatro tiene 28 filas con 32 asientos cada una. ¿Cuál es la capacidad total del teatro? Desarrolla el cálculo.",
    ["Operación: 28 × 32 = 896", "Resultado: 896 asientos"],
    ["Multiplicación correcta + desarrollo",
     "Resultado correcto",
     "Procedimiento correcto, error de cálculo",
     "Plantea multiplicación"]),
  fr!(Solution,
    "Si un libro cuesta $45 y se compran 7 libros, ¿cuánto se paga en total? Explica paso a paso.",
    ["Operación: 45 × 7 = 315", "Resultado: $315"],
    ["Resultado correcto con explicación",
     "Resultado correcto",
     "Error menor en cálculo",
     "Identifica operación"]),
];

const DIVISION: &[FrTemplate] = &[
  fr!(Solution,
    "Se tienen 156 chocolates para repartir entre 12 niños en partes iguales. ¿Cuántos chocolates recibe cada niño? ¿Sobran chocolates? Muestra el procedimiento.",
    ["Operación: 156 ÷ 12 = 13", "Resultado: 13 chocolates cada uno, sobran 0"],
    ["División correcta + residuo identificado",
     "Cociente correcto",
     "Procedimiento correcto, error en cálculo",
     "Plantea división correctamente"]),
  fr!(Solution,
    "Un granjero tiene 245 huevos y quiere ponerlos en cajas de 30. ¿Cuántas cajas puede llenar completamente? ¿Cuántos huevos quedan? Desarrolla.",
    ["Operación: 245 ÷ 30 = 8 resto 5", "Resultado: 8 cajas completas, quedan 5 huevos"],
    ["Cociente y residuo correctos",
     "Cociente correcto",
     "Procedimiento correcto",
     "Plantea división"]),
  fr!(Solution,
    "Si un viaje de 728 km se divide en 4 días iguales, ¿cuántos km se recorren cada día? Explica tu cálculo.",
    ["Operación: 728 ÷ 4 = 182", "Resultado: 182 km por día"],
    ["División correcta con explicación",
     "Resultado correcto",
     "Error de cálculo menor",
     "Identifica operación"]),
];

const FRACTIONS: &[FrTemplate] = &[
  fr!(Solution,
    "Juan comió 2/5 de una pizza y María comió 1/4 de la misma pizza. ¿Qué fracción de la pizza comieron entre los dos? Muestra el procedimiento completo.",
    ["Operación: 2/5 + 1/4 = 8/20 + 5/20 = 13/20", "Resultado: 13/20 de la pizza", "MCM de 5 y 4 = 20"],
    ["Suma correcta con denominador común",
     "Encuentra MCM correctamente",
     "Suma fracciones incorrectamente pero identifica el proceso",
     "Intenta sumar fracciones"]),
  fr!(Solution,
    "Una receta necesita 3/4 de taza de azúcar. Si quiero hacer la mitad de la receta, ¿cuánta azúcar necesito? Desarrolla paso a paso.",
    ["Operación: 3/4 ÷ 2 = 3/4 × 1/2 = 3/8", "Resultado: 3/8 de taza"],
    ["División/multiplicación correcta",
     "Plantea la operación correcta",
     "Intenta dividir la fracción",
     "Identifica que debe dividir"]),
  fr!(Solution,
    "De un pastel, Ana come 1/3, Luis come 1/6 y queda el resto. ¿Qué fracción del pastel quedó? Explica.",
    ["Operación: 1 - (1/3 + 1/6) = 1 - (2/6 + 1/6) = 1 - 3/6 = 1/2", "Resultado: 1/2 del pastel"],
    ["Resultado correcto con procedimiento",
     "Suma las fracciones correctamente",
     "Encuentra MCM pero error en resta",
     "Identifica que debe restar de 1"]),
];

const PERCENTAGES: &[FrTemplate] = &[
  fr!(Solution,
    "Una tienda ofrece 25% de descuento en un producto que cuesta $120. ¿Cuál es el precio final? Muestra todos los cálculos.",
    ["Descuento: 120 × 0.25 = $30", "Precio final: 120 - 30 = $90", "Resultado: $90"],
    ["Cálculo del descuento y precio final correctos",
     "Descuento calculado correctamente",
     "Procedimiento correcto con error de cálculo",
     "Identifica que debe calcular porcentaje"]),
  fr!(Solution,
    "Si el precio de un artículo aumentó de $80 a $100, ¿cuál fue el porcentaje de aumento? Desarrolla el procedimiento.",
    ["Aumento: 100 - 80 = $20", "Porcentaje: (20/80) × 100 = 25%", "Resultado: 25% de aumento"],
    ["Porcentaje correcto con procedimiento",
     "Calcula el aumento correctamente",
     "Procedimiento correcto con error",
     "Identifica la diferencia de precios"]),
  fr!(Solution,
    "En una clase de 40 estudiantes, el 35% son mujeres. ¿Cuántas mujeres hay en la clase? Explica paso a paso.",
    ["Operación: 40 × 0.35 = 14", "Resultado: 14 mujeres"],
    ["Cálculo correcto con explicación",
     "Resultado correcto",
     "Error menor en cálculo",
     "Plantea la operación correctamente"]),
];

const EQUATIONS: &[FrTemplate] = &[
  fr!(Solution,
    "Si el triple de un número más 7 es igual a 25, ¿cuál es el número? Plantea la ecuación y resuélvela paso a paso.",
    ["Ecuación: 3x + 7 = 25", "Despeje: 3x = 25 - 7 = 18", "Resultado: x = 18/3 = 6"],
    ["Ecuación planteada y resuelta correctamente",
     "Ecuación correcta, error en despeje",
     "Plantea la ecuación correctamente",
     "Identifica que es una ecuación"]),
  fr!(Solution,
    "La edad de Pedro es el doble de la edad de Juan más 5 años. Si Pedro tiene 35 años, ¿cuántos años tiene Juan? Desarrolla.",
    ["Ecuación: 2J + 5 = 35", "Despeje: 2J = 30", "Resultado: J = 15 años"],
    ["Planteamiento y solución correctos",
     "Ecuación bien planteada",
     "Error en despeje con ecuación correcta",
     "Identifica la relación entre edades"]),
  fr!(Solution,
    "Resuelve: 3x + 12 = 5x - 8. Muestra cada paso de la solución.",
    ["Paso 1: 12 + 8 = 5x - 3x", "Paso 2: 20 = 2x", "Resultado: x = 10"],
    ["Solución correcta con todos los pasos",
     "Despeje correcto con error de cálculo",
     "Agrupa términos correctamente",
     "Intenta despejar variables"]),
];

const GEOMETRY: &[FrTemplate] = &[
  fr!(Solution,
    "Un terreno rectangular mide 45 metros de largo y 28 metros de ancho. Calcula su perímetro y su área. Muestra el procedimiento.",
    ["Perímetro: 2(45 + 28) = 2(73) = 146 m", "Área: 45 × 28 = 1260 m²"],
    ["Perímetro y área correctos",
     "Una de las dos medidas correcta",
     "Fórmulas correctas con error de cálculo",
     "Identifica las fórmulas a usar"]),
  fr!(Solution,
    "Un triángulo tiene base de 12 cm y altura de 8 cm. ¿Cuál es su área? Explica la fórmula utilizada.",
    ["Fórmula: A = (base × altura) / 2", "Cálculo: (12 × 8) / 2 = 96/2 = 48", "Resultado: 48 cm²"],
    ["Fórmula y cálculo correctos",
     "Fórmula correcta con error menor",
     "Identifica la fórmula del triángulo",
     "Intenta calcular área"]),
  fr!(Solution,
    "Un círculo tiene radio de 7 cm. Calcula su circunferencia y su área (usa π = 3.14). Desarrolla paso a paso.",
    ["Circunferencia: 2πr = 2 × 3.14 × 7 = 43.96 cm", "Área: πr² = 3.14 × 49 = 153.86 cm²"],
    ["Circunferencia y área correctas",
     "Una medida correcta",
     "Fórmulas correctas con error de cálculo",
     "Identifica las fórmulas del círculo"]),
];

/// Topic keyword families, matched on the normalized topic in this order.
const FAMILIES: &[(&[&str], &[FrTemplate])] = &[
  (&["multiplic", "producto", "veces"], MULTIPLICATION),
  (&["division", "dividir", "cociente", "reparto"], DIVISION),
  (&["fraccion", "numerador", "denominador", "quebrado"], FRACTIONS),
  (&["porcentaje", "%", "descuento", "aumento"], PERCENTAGES),
  (&["ecuacion", "incognita", "variable", "despej"], EQUATIONS),
  (&["geometr", "area", "perimetro", "triangulo", "rectangulo", "circulo", "cuadrado"], GEOMETRY),
];

const ADD_SUB_KEYWORDS: &[&str] = &["suma", "resta", "adicion", "sustraccion"];

fn add_sub_for(level: Level) -> &'static [FrTemplate] {
  match level.get() {
    1 => ADD_SUB_L1,
    2 => ADD_SUB_L2,
    _ => ADD_SUB_L3,
  }
}

fn math_pool(level: Level, topic_norm: &str) -> Vec<&'static FrTemplate> {
  // Index 0 is the banded add/sub family, then FAMILIES in order.
  let families: Vec<&'static [FrTemplate]> =
    std::iter::once(add_sub_for(level)).chain(FAMILIES.iter().map(|(_, f)| *f)).collect();

  let lead = if ADD_SUB_KEYWORDS.iter().any(|k| topic_norm.contains(k)) {
    Some(0)
  } else {
    FAMILIES
      .iter()
      .position(|(keys, _)| keys.iter().any(|k| topic_norm.contains(k)))
      .map(|i| i + 1)
  };

  let mut pool: Vec<&'static FrTemplate> = match lead {
    Some(i) => families[i].iter().collect(),
    None => MATH_OPEN.iter().collect(),
  };
  for (i, family) in families.iter().enumerate() {
    if Some(i) != lead {
      pool.extend(family.iter());
    }
  }
  pool
}

/// Free-response pool for a request. Never empty.
pub fn free_response_pool(domain: Domain, level: Level, lang: Language, topic_norm: &str) -> Vec<&'static FrTemplate> {
  match (domain, lang) {
    (_, Language::En) => GENERIC_EN.iter().collect(),
    (Domain::MathPhysics, Language::Es) => math_pool(level, topic_norm),
    _ => GENERIC.iter().collect(),
  }
}
