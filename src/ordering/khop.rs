use crate::error::{OrderingError,Result};
use crate::graph::{EliminationGraph,Marker};
use crate::ordering::PermutationStrategy;
use crate::sparse::SparseView;

///Static ordering from breadth-first "hop histograms".
///
///For every node, `h[d]` counts the nodes first reached `d` hops away.
///The reach `sum_{d>=1} h[d] * decay^(d-1)` is divided by the lever
///`sum_d d * h[d]`, and nodes are taken in ascending order of that key
///(lowest index on ties). Peripheral nodes have a long lever and a small
///reach, so they go first.
///
///Experimental and not a good default: on most matrices it loses to the
///minimum degree and minimum fill-in strategies.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct KHopDegree{
    decay : f64,
    max_hops : Option<usize>
}

impl Default for KHopDegree{
    fn default() -> Self{
        KHopDegree { decay : 0.5, max_hops : None }
    }
}

impl KHopDegree{
    ///`decay` weights hop `d` by `decay^(d-1)` and must lie strictly in (0,1).
    pub fn new(decay : f64) -> Result<Self>{
        if !(decay>0.0 && decay<1.0){
            return Err(OrderingError::invalid_argument("decay",
                format!("must lie strictly between 0 and 1, got {}",decay)));
        }
        Ok(KHopDegree { decay : decay, max_hops : None })
    }

    ///Stops each expansion after `max_hops` hops.
    pub fn with_max_hops(self,max_hops : usize) -> Self{
        KHopDegree { max_hops : Some(max_hops), ..self }
    }

    pub fn decay(&self) -> f64{ self.decay }
    pub fn max_hops(&self) -> Option<usize>{ self.max_hops }

    ///Number of nodes first reached at each hop distance from `start`,
    ///with `h[0] == 1` for the start itself.
    pub fn hop_histogram(&self,g : &EliminationGraph,start : usize,marker : &mut Marker) -> Vec<usize>{
        marker.next_generation();
        marker.mark(start);
        let mut hist = vec![1];
        let mut frontier = vec![start];
        let mut next = Vec::<usize>::new();
        while !frontier.is_empty() && self.max_hops.map_or(true,|m| hist.len()<=m){
            next.clear();
            for &u in frontier.iter(){
                for &v in g.neighbors(u).iter(){
                    if !marker.is_marked(v){
                        marker.mark(v);
                        next.push(v);
                    }
                }
            }
            if next.is_empty(){
                break;
            }
            hist.push(next.len());
            std::mem::swap(&mut frontier,&mut next);
        }
        hist
    }

    ///Ordering key of one histogram: decayed reach over lever.
    pub fn score(&self,hist : &[usize]) -> f64{
        let mut reach=0.0;
        let mut lever=0.0;
        let mut w=1.0;
        for (d,&h) in hist.iter().enumerate().skip(1){
            reach+=w*(h as f64);
            lever+=(d as f64)*(h as f64);
            w*=self.decay;
        }
        if lever>0.0 { reach/lever } else { 0.0 }
    }

    pub fn order_graph(&self,g : &EliminationGraph) -> Vec<usize>{
        let n=g.nnodes();
        let mut marker = Marker::new(n);
        let keys : Vec<f64> = (0..n).map(|i|{
            let hist=self.hop_histogram(g,i,&mut marker);
            let key=self.score(&hist);
            log::trace!("k-hop: node {} histogram {:?} key {}",i,hist,key);
            key
        }).collect();
        let mut perm : Vec<usize> = (0..n).collect();
        perm.sort_by(|&a,&b| keys[a].total_cmp(&keys[b]).then(a.cmp(&b)));
        perm
    }
}

impl PermutationStrategy for KHopDegree{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        //Fields may have been built without `new`, e.g. through config
        KHopDegree::new(self.decay)?;
        let g = EliminationGraph::new(mat)?;
        log::debug!("k-hop degree: ordering {} nodes (decay {}, max hops {:?})",g.nnodes(),self.decay,self.max_hops);
        Ok(self.order_graph(&g))
    }
}
